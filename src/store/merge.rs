// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog + env file merging.
//!
//! ```text
//! Catalog [PORT, MONGODB_URI, ...]      EnvMap {MONGODB_URI, MY_FLAG}
//!            \                              /
//!             +--------> merge() <---------+
//!                          |
//!                          v
//! [PORT, MONGODB_URI, ..., MY_FLAG (Custom/Detected)]
//!                          |
//!                 EntryFilter::apply()  category / required-only
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use super::{EnvMap, EnvUpdate, display_value, mask};
use crate::catalog::{Catalog, VariableSpec};

/// Category given to keys found in the file but not in the catalog.
pub const CUSTOM_CATEGORY: &str = "Custom";
/// Service given to keys found in the file but not in the catalog.
pub const DETECTED_SERVICE: &str = "Detected";
/// Description given to keys found in the file but not in the catalog.
pub const DETECTED_DESCRIPTION: &str = "Auto-detected from .env";
/// Pseudo category that matches every entry.
pub const ALL_CATEGORIES: &str = "All";

/// A catalog entry together with what the env file currently says about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedEntry {
    #[serde(flatten)]
    pub spec: VariableSpec,
    pub present: bool,
    #[serde(skip)]
    pub raw_value: String,
    pub masked_value: String,
}

impl MergedEntry {
    fn observe(spec: VariableSpec, raw: Option<&str>) -> Self {
        let raw_value = raw.unwrap_or_default().to_string();
        let shown = display_value(&raw_value);
        Self {
            present: !shown.is_empty(),
            masked_value: mask(shown),
            spec,
            raw_value,
        }
    }

    /// The value with surrounding quotes removed.
    #[must_use]
    pub fn display_value(&self) -> &str {
        display_value(&self.raw_value)
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.spec.category == CUSTOM_CATEGORY
    }
}

/// Every catalog entry in catalog order, then every unknown key in file order.
#[must_use]
pub fn merge(catalog: &Catalog, values: &EnvMap) -> Vec<MergedEntry> {
    let known = catalog
        .iter()
        .map(|spec| MergedEntry::observe(spec.clone(), values.get(&spec.var)));

    let detected = values
        .iter()
        .filter(|(key, _)| !catalog.contains(key))
        .map(|(key, raw)| {
            let spec = VariableSpec::new(
                CUSTOM_CATEGORY,
                DETECTED_SERVICE,
                key,
                false,
                DETECTED_DESCRIPTION,
            );
            MergedEntry::observe(spec, Some(raw))
        });

    known.chain(detected).collect()
}

/// Narrow a merged list the way the category picker does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// `None` or `"All"` keeps every category.
    pub category: Option<String>,
    pub required_only: bool,
}

impl EntryFilter {
    #[must_use]
    pub fn matches(&self, entry: &MergedEntry) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => entry.spec.category == category,
        };
        category_ok && (!self.required_only || entry.spec.required)
    }

    #[must_use]
    pub fn apply(&self, entries: Vec<MergedEntry>) -> Vec<MergedEntry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// `"All"` followed by the sorted, distinct categories of `entries`.
#[must_use]
pub fn categories(entries: &[MergedEntry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = entries.iter().map(|e| e.spec.category.as_str()).collect();
    std::iter::once(ALL_CATEGORIES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Required catalog variables that `updates` would set to a blank value.
///
/// Skipped updates (`value: None`) are not reported.
#[must_use]
pub fn missing_required(catalog: &Catalog, updates: &[EnvUpdate]) -> Vec<String> {
    updates
        .iter()
        .filter(|u| u.value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .filter(|u| catalog.get(&u.key).is_some_and(|spec| spec.required))
        .map(|u| u.key.clone())
        .collect()
}
