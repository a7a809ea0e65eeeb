// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display-only redaction of secret values.
//!
//! ```text
//! ""             --> ""
//! "secret"       --> "******"        (<= 8 chars: fully hidden)
//! "abcdefghij"   --> "abcd***ghij"   (> 8 chars: 4 + *** + 4)
//! ```

const VISIBLE_EDGE: usize = 4;
const FULLY_HIDDEN_MAX: usize = 8;

/// Redact `value` for display or export. Counts characters, not bytes.
#[must_use]
pub fn mask(value: &str) -> String {
    let count = value.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= FULLY_HIDDEN_MAX {
        return "*".repeat(count);
    }
    let head: String = value.chars().take(VISIBLE_EDGE).collect();
    let tail: String = value.chars().skip(count - VISIBLE_EDGE).collect();
    format!("{head}***{tail}")
}
