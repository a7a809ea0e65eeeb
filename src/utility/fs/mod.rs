// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers.
//!
//! ```text
//! write_atomic(path, bytes)
//!   NamedTempFile::new_in(parent) --> copy target permissions
//!     --> write_all --> sync_all --> persist(path)
//! ensure_parent_dir(path)
//! ```

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `contents` without ever exposing a half-written file.
///
/// The temporary file is created next to the target so the final rename
/// stays on one filesystem. An existing target keeps its permissions. On
/// failure the previous content is untouched.
///
/// # Errors
///
/// Returns the underlying I/O error from creating, writing, syncing or
/// renaming the temporary file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create the parent directory of `path` if it has one.
///
/// # Errors
///
/// Returns the I/O error from `create_dir_all`.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
