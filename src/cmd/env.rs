// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file commands: `show`, `categories`, `get` and `set`.

use anyhow::{anyhow, bail};
use tracing::warn;

use crate::cli::env::{GetArgs, SetArgs, ShowArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::store::{
    EntryFilter, EnvStore, EnvUpdate, MergedEntry, categories, display_value, merge,
    missing_required,
};

const COLUMN_GAP: &str = "  ";
const UNSET: &str = "-";

/// Load the env file and merge it with the configured catalog.
///
/// # Errors
///
/// Returns an error if the catalog is invalid or the env file cannot be read.
pub fn load_merged(settings: &Settings) -> Result<Vec<MergedEntry>> {
    let catalog = settings.catalog()?;
    let values = EnvStore::new(&settings.paths.env_file).load()?;
    Ok(merge(&catalog, &values))
}

/// Render merged entries as an aligned table with a header row.
///
/// Values are masked unless `reveal` is set. Unset variables show `-`.
#[must_use]
pub fn format_entries(entries: &[MergedEntry], reveal: bool) -> Vec<String> {
    let header = ["CATEGORY", "SERVICE", "VARIABLE", "REQUIRED", "VALUE"];
    let rows: Vec<[&str; 5]> = entries
        .iter()
        .map(|entry| {
            let value = match (entry.present, reveal) {
                (false, _) => UNSET,
                (true, true) => entry.display_value(),
                (true, false) => entry.masked_value.as_str(),
            };
            [
                entry.spec.category.as_str(),
                entry.spec.service.as_str(),
                entry.spec.var.as_str(),
                if entry.spec.required { "yes" } else { "no" },
                value,
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(header)
        .chain(rows)
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Names of required entries that have no value.
#[must_use]
pub fn unset_required(entries: &[MergedEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.spec.required && !e.present)
        .map(|e| e.spec.var.as_str())
        .collect()
}

/// Handler for `show`.
///
/// # Errors
///
/// Returns an error if the env file cannot be loaded.
pub fn run_show_command(args: &ShowArgs, settings: &Settings) -> Result<()> {
    let filter = EntryFilter {
        category: args.category.clone(),
        required_only: args.required_only,
    };
    let entries = filter.apply(load_merged(settings)?);

    if entries.is_empty() {
        println!("No variables match");
        return Ok(());
    }
    for line in format_entries(&entries, args.reveal) {
        println!("{line}");
    }

    let unset = unset_required(&entries);
    if !unset.is_empty() {
        println!();
        println!("Required but unset: {}", unset.join(", "));
    }
    Ok(())
}

/// Handler for `categories`.
///
/// # Errors
///
/// Returns an error if the env file cannot be loaded.
pub fn run_categories_command(settings: &Settings) -> Result<()> {
    for category in categories(&load_merged(settings)?) {
        println!("{category}");
    }
    Ok(())
}

/// Handler for `get`: prints the unquoted value.
///
/// # Errors
///
/// Returns an error if the env file cannot be loaded or `KEY` is not set.
pub fn run_get_command(args: &GetArgs, settings: &Settings) -> Result<()> {
    let store = EnvStore::new(&settings.paths.env_file);
    let values = store.load()?;
    let raw = values
        .get(&args.key)
        .ok_or_else(|| anyhow!("'{}' is not set in {}", args.key, store.path().display()))?;
    println!("{}", display_value(raw));
    Ok(())
}

/// Handler for `set`.
///
/// Blank values for required catalog variables are refused unless `--force`.
///
/// # Errors
///
/// Returns an error if a required variable would be blanked without
/// `--force`, or if the env file cannot be read or written.
pub fn run_set_command(args: &SetArgs, settings: &Settings) -> Result<()> {
    let catalog = settings.catalog()?;
    let updates: Vec<EnvUpdate> = args
        .assignments
        .iter()
        .map(|(key, value)| EnvUpdate::set(key, value))
        .collect();

    let missing = missing_required(&catalog, &updates);
    if !missing.is_empty() {
        warn!(vars = ?missing, forced = args.force, "required variables set to blank values");
        if !args.force {
            bail!(
                "required variables would be blank: {} (use --force to write anyway)",
                missing.join(", ")
            );
        }
    }

    let store = EnvStore::new(&settings.paths.env_file);
    let summary = store.write(&updates)?;
    println!(
        "Saved {}: {} updated, {} added",
        store.path().display(),
        summary.replaced.len(),
        summary.appended.len()
    );
    Ok(())
}
