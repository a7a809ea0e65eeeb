// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Masked status reports.
//!
//! ```text
//! &[MergedEntry] --> ExportRow (masked value only)
//!                       |
//!            +----------+----------+
//!            v                     v
//!        write_csv()           write_pdf()
//!        csv::Writer           pdf::render (A4, paginated)
//!            \                     /
//!             +--> write_atomic <-+
//! ```
//!
//! Raw values never reach a report: [`ExportRow`] has no field for them.

mod pdf;


use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::info;

use crate::error::ExportError;
use crate::store::MergedEntry;
use crate::utility::fs::{ensure_parent_dir, write_atomic};

pub use pdf::render as render_pdf;

/// Column titles shared by every format.
pub const HEADERS: [&str; 6] = [
    "Category",
    "Service",
    "Var",
    "Required",
    "Present",
    "Value (masked)",
];

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Var")]
    pub var: String,
    #[serde(rename = "Required")]
    pub required: &'static str,
    #[serde(rename = "Present")]
    pub present: &'static str,
    #[serde(rename = "Value (masked)")]
    pub masked_value: String,
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

impl From<&MergedEntry> for ExportRow {
    fn from(entry: &MergedEntry) -> Self {
        Self {
            category: entry.spec.category.clone(),
            service: entry.spec.service.clone(),
            var: entry.spec.var.clone(),
            required: yes_no(entry.spec.required),
            present: yes_no(entry.present),
            masked_value: entry.masked_value.clone(),
        }
    }
}

impl ExportRow {
    /// Cells in [`HEADERS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.category,
            &self.service,
            &self.var,
            self.required,
            self.present,
            &self.masked_value,
        ]
    }
}

/// Convert merged entries to report rows.
#[must_use]
pub fn rows(entries: &[MergedEntry]) -> Vec<ExportRow> {
    entries.iter().map(ExportRow::from).collect()
}

/// `dir/apis_YYYYmmdd_HHMMSS.<ext>`
#[must_use]
pub fn default_export_path<Tz>(dir: &Path, format: ExportFormat, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dir.join(format!(
        "apis_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}

/// Serialize rows as CSV with a header line.
///
/// # Errors
///
/// Returns `ExportError::Csv` if a row cannot be serialized.
pub fn render_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let csv_error = |source| ExportError::Csv {
        path: PathBuf::from("<memory>"),
        source,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(HEADERS).map_err(csv_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv_error(csv::Error::from(e.into_error())))
}

/// Write a CSV report to `path`.
///
/// # Errors
///
/// Returns `ExportError::Csv` on serialization failure and `ExportError::Io`
/// if the file cannot be written.
pub fn write_csv(rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
    let bytes = render_csv(rows).map_err(|e| match e {
        ExportError::Csv { source, .. } => ExportError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    write_report(path, &bytes)
}

/// Write a paginated PDF report to `path`.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be written.
pub fn write_pdf(rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
    write_report(path, &pdf::render(rows))
}

/// Write `entries` in `format` to `path`, creating its directory.
///
/// # Errors
///
/// See [`write_csv`] and [`write_pdf`].
pub fn export_report(
    entries: &[MergedEntry],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let report_rows = rows(entries);
    match format {
        ExportFormat::Csv => write_csv(&report_rows, path)?,
        ExportFormat::Pdf => write_pdf(&report_rows, path)?,
    }
    info!(path = %path.display(), %format, rows = report_rows.len(), "report exported");
    Ok(())
}

fn write_report(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(io_error)?;
    write_atomic(path, bytes).map_err(io_error)
}
