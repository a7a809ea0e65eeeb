// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("envdesk.toml")
//!   .add_toml_file(--config)
//!   .add_toml_str()
//!   .with_env_prefix("ENVDESK")
//!   .set(--set / --env-file)
//!        |
//!        v
//!    build() --> Settings (validated)
//! ```

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Settings;
use crate::error::{ConfigError, Result};

/// Separator between nesting levels in environment variable names.
///
/// Single underscores belong to key names (`ENV_FILE`), so sections are split
/// on a double underscore: `ENVDESK_PATHS__ENV_FILE`.
const ENV_SEPARATOR: &str = "__";

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML settings file that must exist.
    ///
    /// The file is read when `build()` is called. A missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an override that wins over every file and environment source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` assignment as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the assignment has no `=` or an
    /// empty key.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let Some((key, value)) = assignment
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(k, _)| !k.is_empty())
        else {
            return Err(ConfigError::InvalidValue {
                section: "cli".to_string(),
                key: "--set".to_string(),
                message: format!("expected KEY=VALUE, got '{assignment}'"),
            }
            .into());
        };
        self.set(key, value)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required settings files are missing.
    /// - Settings files have invalid TOML syntax or unknown keys.
    /// - The merged settings fail validation (see [`Settings::validate`]).
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
