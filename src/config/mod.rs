// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for envdesk.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envdesk.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVDESK_* env vars
//! 5. --set section.key=value
//! 6. dedicated flags (--env-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVDESK_PATHS__ENV_FILE=/srv/app/.env  → paths.env_file
//! ENVDESK_MONGO__PORT=27018              → mongo.port
//! ENVDESK_HEALTH__TIMEOUT_SECS=10        → health.timeout_secs
//! ```
//!
//! # Catalog Override
//!
//! ```toml
//! [[catalog]]
//! category = "Core"
//! service = "Server"
//! var = "PORT"
//! required = false
//! description = "Backend port"
//! ```
//!
//! When any `[[catalog]]` entry is present the built-in catalog is replaced
//! entirely.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Catalog, VariableSpec};
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{HealthConfig, MongoConfig, PathsConfig};

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File locations.
    pub paths: PathsConfig,
    /// HTTP health checks.
    pub health: HealthConfig,
    /// MongoDB reachability probe.
    pub mongo: MongoConfig,
    /// Replacement catalog; `None` uses the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<VariableSpec>>,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdesk::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("envdesk.toml")
    ///     .with_env_prefix("ENVDESK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, has unknown keys or
    /// fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The catalog every store operation should use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateVar` if a configured catalog repeats a
    /// variable.
    pub fn catalog(&self) -> std::result::Result<Catalog, ConfigError> {
        self.catalog
            .as_ref()
            .map_or_else(|| Ok(Catalog::builtin()), |entries| Catalog::new(entries.clone()))
    }

    /// Reject settings that would only fail later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for zero timeouts, empty service
    /// names or URLs, and `ConfigError::DuplicateVar` for a repeated catalog
    /// variable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.health.timeout_secs == 0 {
            return Err(invalid("health", "timeout_secs", "must be at least 1"));
        }
        if self.mongo.timeout_secs == 0 {
            return Err(invalid("mongo", "timeout_secs", "must be at least 1"));
        }
        if self.mongo.host.trim().is_empty() {
            return Err(invalid("mongo", "host", "must not be empty"));
        }
        if let Some(target) = self
            .health
            .services
            .iter()
            .find(|t| t.name.trim().is_empty() || t.url.trim().is_empty())
        {
            return Err(invalid(
                "health",
                "services",
                &format!("service '{}' needs both a name and a url", target.name),
            ));
        }
        self.catalog().map(|_| ())
    }

    /// Format settings for display, one `key = value` line each, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "paths.env_file".to_string(),
            self.paths.env_file.display().to_string(),
        );
        options.insert(
            "paths.exports_dir".to_string(),
            self.paths.exports_dir.display().to_string(),
        );
        options.insert(
            "health.timeout_secs".to_string(),
            self.health.timeout_secs.to_string(),
        );
        let index_width = self.health.services.len().saturating_sub(1).to_string().len();
        for (i, target) in self.health.services.iter().enumerate() {
            options.insert(
                format!("health.services.{i:0index_width$}"),
                format!("{} <{}>", target.name, target.url),
            );
        }
        options.insert("mongo.host".to_string(), self.mongo.host.clone());
        options.insert("mongo.port".to_string(), self.mongo.port.to_string());
        options.insert(
            "mongo.timeout_secs".to_string(),
            self.mongo.timeout_secs.to_string(),
        );
        options.insert(
            "catalog".to_string(),
            self.catalog.as_ref().map_or_else(
                || "builtin".to_string(),
                |entries| format!("{} configured entries", entries.len()),
            ),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
