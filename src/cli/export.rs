// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `export` command.
//!
//! ```text
//! envdesk export <format> [--output PATH]
//! csv → apis_YYYYmmdd_HHMMSS.csv in paths.exports_dir
//! pdf → apis_YYYYmmdd_HHMMSS.pdf in paths.exports_dir
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::export::ExportFormat;

/// Arguments for the `export` command.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub format: ExportTarget,
}

/// Report formats that can be exported.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ExportTarget {
    /// Comma-separated values.
    Csv(OutputArgs),

    /// Paginated A4 document.
    Pdf(OutputArgs),
}

/// Where to write the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct OutputArgs {
    /// Output file (default: a timestamped file in paths.exports_dir).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportTarget {
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        match self {
            Self::Csv(_) => ExportFormat::Csv,
            Self::Pdf(_) => ExportFormat::Pdf,
        }
    }

    #[must_use]
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Self::Csv(args) | Self::Pdf(args) => args.output.as_ref(),
        }
    }
}
