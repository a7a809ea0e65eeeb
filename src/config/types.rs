// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! [paths]   env_file, exports_dir
//! [health]  timeout_secs, [[health.services]] name/url
//! [mongo]   host, port, timeout_secs
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::health::ServiceTarget;

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// The `.env` file being edited.
    pub env_file: PathBuf,
    /// Where `export` writes reports when `--output` is not given.
    pub exports_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from("backend/.env"),
            exports_dir: PathBuf::from("tools/exports"),
        }
    }
}

/// HTTP health check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Endpoints probed by `check`, in report order.
    pub services: Vec<ServiceTarget>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 3,
            services: vec![
                ServiceTarget::new("Backend API", "http://localhost:5000/api/health"),
                ServiceTarget::new("Frontend (Local)", "http://localhost:3000"),
            ],
        }
    }
}

impl HealthConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// MongoDB reachability probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            timeout_secs: 3,
        }
    }
}

impl MongoConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
