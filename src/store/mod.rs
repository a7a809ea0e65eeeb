// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `.env` store.
//!
//! # Operations
//!
//! ```text
//! EnvStore::load()        file --> EnvFile --> EnvMap   (missing file = empty)
//! merge(&Catalog, &map)   catalog entries + Custom/Detected entries
//! mask(value)             display-only redaction
//! EnvStore::write(&[..])  EnvFile::upsert per update --> write_atomic
//! ```
//!
//! # Value Handling
//!
//! Values are kept exactly as written after `=` (trimmed, quotes included).
//! Quotes are only removed for display by [`display_value`]. On write, values
//! are wrapped in double quotes unless they are already fully quoted.

mod line;
mod mask;
mod merge;


use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use line::{EnvFile, EnvLine, Upsert, quote_value};
pub use mask::mask;
pub use merge::{
    ALL_CATEGORIES, CUSTOM_CATEGORY, DETECTED_DESCRIPTION, DETECTED_SERVICE, EntryFilter,
    MergedEntry, categories, merge, missing_required,
};

use crate::error::StoreError;
use crate::utility::fs::{ensure_parent_dir, write_atomic};

/// Insertion-ordered key -> raw value mapping.
///
/// Inserting a key that already exists keeps its original position and
/// replaces the value, the way repeated keys behave in a dotenv loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(String, String)>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Strip one pair of matching surrounding quotes (`"` or `'`).
#[must_use]
pub fn display_value(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2
            && let Some(inner) = raw
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

/// True if `value` would break the one-assignment-per-line format.
#[must_use]
pub fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// One requested change. `value: None` leaves the key untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvUpdate {
    pub key: String,
    pub value: Option<String>,
}

impl EnvUpdate {
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn skip(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// What a [`EnvStore::write`] call did, key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub replaced: Vec<String>,
    pub appended: Vec<String>,
    pub skipped: Vec<String>,
}

/// A `.env` file on disk.
#[derive(Debug, Clone)]
pub struct EnvStore {
    path: PathBuf,
}

impl EnvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and classify every line. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read as UTF-8.
    pub fn read_file(&self) -> Result<EnvFile, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let file = EnvFile::parse(&text);
                debug!(path = %self.path.display(), lines = file.len(), "read env file");
                Ok(file)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "env file missing, treating as empty");
                Ok(EnvFile::default())
            }
            Err(e) => Err(StoreError::read(&self.path, e)),
        }
    }

    /// Load all assignments as raw values.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read.
    pub fn load(&self) -> Result<EnvMap, StoreError> {
        Ok(self.read_file()?.values())
    }

    /// Apply `updates` and replace the file atomically.
    ///
    /// Lines not touched by an update are written back verbatim and in order.
    /// Blank values are accepted; whether a blank required value is allowed is
    /// the caller's decision (see [`missing_required`]).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MultilineValue` if a value contains `\n` or `\r`
    /// (nothing is written), `StoreError::CreateDir` if the directory cannot
    /// be created, `StoreError::Read` if the current file cannot be read and
    /// `StoreError::Write` if the new content cannot be written.
    pub fn write(&self, updates: &[EnvUpdate]) -> Result<WriteSummary, StoreError> {
        if let Some(update) = updates
            .iter()
            .find(|u| u.value.as_deref().is_some_and(has_line_break))
        {
            return Err(StoreError::MultilineValue {
                path: self.path.clone(),
                key: update.key.clone(),
            });
        }

        ensure_parent_dir(&self.path).map_err(|source| StoreError::CreateDir {
            path: self.path.parent().map(Path::to_path_buf).unwrap_or_default(),
            source,
        })?;
        let mut file = self.read_file()?;
        let mut summary = WriteSummary::default();

        for update in updates {
            let Some(value) = update.value.as_deref() else {
                summary.skipped.push(update.key.clone());
                continue;
            };
            match file.upsert(&update.key, value) {
                Upsert::Replaced(_) => summary.replaced.push(update.key.clone()),
                Upsert::Appended => summary.appended.push(update.key.clone()),
            }
        }

        write_atomic(&self.path, file.render().as_bytes())
            .map_err(|e| StoreError::write(&self.path, e))?;

        info!(
            path = %self.path.display(),
            replaced = summary.replaced.len(),
            appended = summary.appended.len(),
            skipped = summary.skipped.len(),
            "env file written"
        );
        Ok(summary)
    }
}
