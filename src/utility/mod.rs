// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   write_atomic()       temp file + rename
//!   ensure_parent_dir()  create_dir_all on the parent
//! ```

pub mod fs;
