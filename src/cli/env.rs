// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the env file commands.
//!
//! ```text
//! envdesk show [--category AI] [--required-only] [--reveal]
//! envdesk get OPENAI_API_KEY
//! envdesk set PORT=5000 NODE_ENV=production [--force]
//! ```

use std::sync::OnceLock;

use clap::Args;
use regex::Regex;

use crate::store::has_line_break;

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Only show one category ("All" shows every category).
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only show required variables.
    #[arg(short = 'r', long = "required-only")]
    pub required_only: bool,

    /// Show values unmasked.
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name (case-sensitive).
    #[arg(value_name = "KEY", value_parser = parse_key)]
    pub key: String,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Assignments to write. Values are stored double-quoted.
    #[arg(value_name = "KEY=VALUE", required = true, value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,

    /// Write even if a required variable would be left blank.
    #[arg(short = 'f', long)]
    pub force: bool,
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap_or_else(|e| unreachable!("{e}"))
    })
}

/// Validate an env variable name.
///
/// # Errors
///
/// Returns a message if `key` is not a valid variable name.
pub fn parse_key(key: &str) -> Result<String, String> {
    if key_pattern().is_match(key) {
        Ok(key.to_string())
    } else {
        Err(format!(
            "invalid variable name '{key}' (expected letters, digits, '_', '.', '-', not starting with a digit)"
        ))
    }
}

/// Split `KEY=VALUE` at the first `=`. The value may be empty.
///
/// # Errors
///
/// Returns a message if there is no `=`, the key is invalid or the value
/// contains a line break.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = parse_key(key.trim())?;
    if has_line_break(value) {
        return Err(format!("value for '{key}' must be a single line"));
    }
    Ok((key, value.to_string()))
}
