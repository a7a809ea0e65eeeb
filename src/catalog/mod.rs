// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog of known configuration variables.
//!
//! ```text
//! Catalog (ordered, immutable)
//!   Core      PORT  MONGODB_URI*  JWT_SECRET*  NODE_ENV  FRONTEND_URL
//!   AI        OPENAI_API_KEY*  OPENAI_MODEL  OPENAI_EMBEDDING_MODEL
//!   Billing   STRIPE_SECRET_KEY  STRIPE_WEBHOOK_SECRET
//!   Email     EMAIL_SERVICE  EMAIL_USER  EMAIL_PASSWORD  EMAIL_FROM
//!   WhatsApp  TWILIO_ACCOUNT_SID  TWILIO_AUTH_TOKEN  WHATSAPP_PHONE_NUMBER
//!                                                      (* = required)
//! ```
//!
//! The catalog is passed to every operation that needs it. `Settings` either
//! supplies one from `[[catalog]]` entries or falls back to
//! [`Catalog::builtin`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One known configuration variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableSpec {
    pub category: String,
    pub service: String,
    pub var: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl VariableSpec {
    pub fn new(
        category: impl Into<String>,
        service: impl Into<String>,
        var: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            service: service.into(),
            var: var.into(),
            required,
            description: description.into(),
        }
    }
}

/// `(category, service, var, required, description)`
const BUILTIN: &[(&str, &str, &str, bool, &str)] = &[
    ("Core", "Server", "PORT", false, "Backend port (default 5000)"),
    ("Core", "MongoDB", "MONGODB_URI", true, "Database connection string"),
    ("Core", "JWT", "JWT_SECRET", true, "Auth token signing secret"),
    ("Core", "Environment", "NODE_ENV", false, "development / production"),
    ("Core", "Frontend", "FRONTEND_URL", false, "URL for CORS (e.g. https://myapp.com)"),
    ("AI", "OpenAI", "OPENAI_API_KEY", true, "OpenAI API Key"),
    ("AI", "OpenAI", "OPENAI_MODEL", false, "Model (e.g. gpt-4o-mini)"),
    ("AI", "OpenAI", "OPENAI_EMBEDDING_MODEL", false, "Embedding model"),
    ("Billing", "Stripe", "STRIPE_SECRET_KEY", false, "Stripe Secret Key"),
    ("Billing", "Stripe", "STRIPE_WEBHOOK_SECRET", false, "Stripe Webhook Secret"),
    ("Email", "SMTP", "EMAIL_SERVICE", false, "Service (e.g. gmail)"),
    ("Email", "SMTP", "EMAIL_USER", false, "Email username"),
    ("Email", "SMTP", "EMAIL_PASSWORD", false, "Email password"),
    ("Email", "SMTP", "EMAIL_FROM", false, "Sender address"),
    ("WhatsApp", "Twilio", "TWILIO_ACCOUNT_SID", false, "Twilio Account SID"),
    ("WhatsApp", "Twilio", "TWILIO_AUTH_TOKEN", false, "Twilio Auth Token"),
    ("WhatsApp", "Twilio", "WHATSAPP_PHONE_NUMBER", false, "Sender number"),
];

/// Ordered, read-only list of [`VariableSpec`]s with unique `var` keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VariableSpec>,
}

impl Catalog {
    /// Build a catalog from explicit entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateVar` if two entries share a `var`.
    pub fn new(entries: Vec<VariableSpec>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for spec in &entries {
            if !seen.insert(spec.var.as_str()) {
                return Err(ConfigError::DuplicateVar {
                    var: spec.var.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The compiled-in catalog for the chatbot builder backend.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|&(category, service, var, required, description)| {
                    VariableSpec::new(category, service, var, required, description)
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, var: &str) -> Option<&VariableSpec> {
        self.entries.iter().find(|spec| spec.var == var)
    }

    #[must_use]
    pub fn contains(&self, var: &str) -> bool {
        self.get(var).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableSpec> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VariableSpec;
    type IntoIter = std::slice::Iter<'a, VariableSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
