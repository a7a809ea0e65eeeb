// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvdeskError (16 bytes)
//!                   |
//!   +--------+------+-----+--------+
//!   v        v            v        v
//! Store    Config      Export    Probe
//!  Box      Box         Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Store   Read, CreateDir, Write, MultilineValue
//!   Config  DuplicateVar, InvalidValue
//!   Export  Csv, Io
//!   Probe   InvalidTarget, Client
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvdeskError`].
pub type EnvdeskResult<T> = std::result::Result<T, EnvdeskError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum EnvdeskError {
    /// Environment file could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Report export failed.
    #[error("export error: {0}")]
    Export(#[from] Box<ExportError>),

    /// Health probe could not be set up.
    #[error("probe error: {0}")]
    Probe(#[from] Box<ProbeError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvdeskError {
                fn from(err: $error) -> Self {
                    EnvdeskError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    ConfigError => Config,
    ExportError => Export,
    ProbeError => Probe,
}

// --- Store Errors ---

/// Environment file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The env file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parent directory of the env file could not be created.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or replacing the env file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An update value contains a line break and would split into two lines.
    #[error("value for '{key}' in '{}' contains a line break", path.display())]
    MultilineValue { path: PathBuf, key: String },
}

impl StoreError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failing operation touched.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::MultilineValue { path, .. } => path,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The same variable appears twice in a catalog.
    #[error("variable '{var}' is listed more than once in the catalog")]
    DuplicateVar { var: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Export Errors ---

/// Report export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("csv export to '{}' failed: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing the report file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Probe Errors ---

/// Health probe setup errors.
///
/// A service being down is a probe *outcome*, not an error; these variants
/// cover probes that could not be attempted at all.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The target URL could not be parsed.
    #[error("invalid probe target '{name}': {message}")]
    InvalidTarget { name: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests;
