// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional settings files (can repeat)
//! --set KEY=VAL     ← Direct settings override (can repeat)
//! --env-file PATH   ← paths.env_file override
//! --log-level N     ← Console verbosity (0-5)
//! --log-file FILE   ← Also log to a file
//! --log-json        ← JSON console logs
//!
//! Precedence: --env-file > --set > env vars > --config > envdesk.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// The .env file to operate on (overrides paths.env_file).
    #[arg(short = 'e', long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Sets a setting, such as 'mongo.port=27018'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file. The file always logs at debug level or above the
    /// console level, whichever is more verbose.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Emit console logs as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// Disables loading ./envdesk.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `key=value` settings overrides,
    /// in the order they should be applied.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref path) = self.env_file {
            overrides.push(format!("paths.env_file={}", path.display()));
        }

        overrides
    }
}
