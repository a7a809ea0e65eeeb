// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `check` command.

use clap::Args;

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Do not probe MongoDB.
    #[arg(long = "skip-mongo")]
    pub skip_mongo: bool,
}
