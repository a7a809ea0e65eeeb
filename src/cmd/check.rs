// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Health check command implementation.

use anyhow::bail;

use crate::cli::check::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::health::run_checks;

/// Handler for `check`.
///
/// # Errors
///
/// Returns an error if any probe is not up, or if the targets are invalid.
pub async fn run_check_command(args: &CheckArgs, settings: &Settings) -> Result<()> {
    let summary = run_checks(settings, !args.skip_mongo).await?;

    println!("System Health Check");
    for report in &summary.reports {
        println!("{}", report.format_line());
    }
    println!();

    if summary.all_healthy() {
        println!("All systems operational!");
        return Ok(());
    }

    let unhealthy = summary.unhealthy();
    println!("Some systems are down or degraded.");
    bail!(
        "{} of {} checks failed",
        unhealthy.len(),
        summary.reports.len()
    )
}
