// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation.

use std::path::PathBuf;

use chrono::Local;

use crate::cli::export::ExportArgs;
use crate::cmd::env::load_merged;
use crate::config::Settings;
use crate::error::Result;
use crate::export::{default_export_path, export_report};

/// Handler for `export`. Returns the path that was written.
///
/// # Errors
///
/// Returns an error if the env file cannot be loaded or the report cannot be
/// written.
pub fn run_export_command(args: &ExportArgs, settings: &Settings) -> Result<PathBuf> {
    let format = args.format.format();
    let entries = load_merged(settings)?;
    let path = args.format.output().cloned().unwrap_or_else(|| {
        default_export_path(&settings.paths.exports_dir, format, &Local::now())
    });

    export_report(&entries, format, &path)?;
    println!("{format} exported to {}", path.display());
    Ok(path)
}
