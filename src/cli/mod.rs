// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdesk using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdesk [global options] <command>
//! show [--category C] [--required-only] [--reveal]
//! categories
//! get KEY
//! set KEY=VALUE... [--force]
//! export {csv|pdf} [--output PATH]
//! check [--skip-mongo]
//! options | sources | version
//! ```

pub mod check;
pub mod env;
pub mod export;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::check::CheckArgs;
use crate::cli::env::{GetArgs, SetArgs, ShowArgs};
use crate::cli::export::ExportArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment Desk
///
/// Edits the backend `.env` against the known variable catalog, exports masked
/// status reports and checks that the stack is reachable.
#[derive(Debug, Parser)]
#[command(
    name = "envdesk",
    author,
    version,
    about = "Environment desk for the chatbot builder stack",
    long_about = "Edits the backend .env file against the catalog of known variables,\n\
                  exports masked status reports (CSV, PDF) and checks that the API,\n\
                  the frontend and MongoDB are reachable.\n\n\
                  Values are masked everywhere except `get` and `show --reveal`.",
    after_help = "SETTINGS:\n\n\
                  envdesk reads `envdesk.toml` from the current directory if present,\n\
                  then every file given with --config, then ENVDESK_* environment\n\
                  variables (sections separated by a double underscore, e.g.\n\
                  ENVDESK_PATHS__ENV_FILE), then --set and --env-file. Use\n\
                  --no-default-config to skip envdesk.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all settings and their resolved values.
    Options,

    /// Lists the settings files that were loaded.
    Sources,

    /// Lists catalog and detected variables with masked values.
    Show(ShowArgs),

    /// Lists the categories available to `show --category`.
    Categories,

    /// Prints the unmasked value of one variable.
    Get(GetArgs),

    /// Sets one or more variables in the env file.
    Set(SetArgs),

    /// Exports a masked status report.
    Export(ExportArgs),

    /// Checks that the configured services and MongoDB are reachable.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
