// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-level model of an env file.
//!
//! ```text
//! "# comment"        --> Comment   (verbatim)
//! ""  / "   "        --> Blank     (verbatim)
//! "KEY=value"        --> Assignment { key, value }
//! "export KEY=value" --> Assignment { key, value }
//! "garbage"          --> Other     (verbatim, never parsed)
//! ```
//!
//! Every variant keeps its original text, so rendering an untouched file
//! reproduces it line for line.

use std::borrow::Cow;

use super::EnvMap;

/// One line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine {
    Blank(String),
    Comment(String),
    Assignment {
        key: String,
        value: String,
        text: String,
    },
    /// Non-comment line without a usable `KEY=` prefix.
    Other(String),
}

impl EnvLine {
    /// Classify a single line of text (without its line terminator).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Blank(text.to_string());
        }
        if trimmed.starts_with('#') {
            return Self::Comment(text.to_string());
        }
        match split_assignment(trimmed) {
            Some((key, value)) => Self::Assignment {
                key: key.to_string(),
                value: value.to_string(),
                text: text.to_string(),
            },
            None => Self::Other(text.to_string()),
        }
    }

    /// A freshly written `KEY="value"` line.
    #[must_use]
    pub fn assignment(key: &str, value: &str) -> Self {
        let value = quote_value(value).into_owned();
        Self::Assignment {
            text: format!("{key}={value}"),
            key: key.to_string(),
            value,
        }
    }

    /// Key of an active assignment.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Assignment { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The line as it will be written back.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blank(text) | Self::Comment(text) | Self::Other(text) => text,
            Self::Assignment { text, .. } => text,
        }
    }
}

fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let key = key.strip_prefix("export ").map_or(key, str::trim_start);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(value.trim())))
}

/// Drop a trailing ` # comment` the way dotenv loaders do.
///
/// Unquoted values end at the first `#` preceded by whitespace. Quoted values
/// end at their closing quote when only a comment follows it.
fn strip_inline_comment(value: &str) -> &str {
    if let Some(quote) = value.chars().next().filter(|c| matches!(c, '"' | '\'')) {
        if let Some(end) = value[1..].find(quote) {
            let close = end + 2;
            let rest = value[close..].trim_start();
            if rest.is_empty() || rest.starts_with('#') {
                return &value[..close];
            }
        }
        return value;
    }
    value
        .char_indices()
        .find(|&(i, c)| c == '#' && value[..i].ends_with(char::is_whitespace))
        .map_or(value, |(i, _)| value[..i].trim_end())
}

/// Wrap `value` in double quotes unless it already is fully quoted.
#[must_use]
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("\"{value}\""))
    }
}

/// Where an upsert landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// An existing assignment at this line index was rewritten.
    Replaced(usize),
    /// A new line was added at the end.
    Appended,
}

/// Ordered sequence of [`EnvLine`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<EnvLine>,
}

impl EnvFile {
    /// Split `text` into classified lines. Both `\n` and `\r\n` endings are
    /// accepted; a trailing newline does not produce an extra blank line.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(EnvLine::parse).collect(),
        }
    }

    /// Join all lines with `\n`, ending in exactly one newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(EnvLine::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Set `key` to `value` (quoted on write).
    ///
    /// If `key` already has assignments, the last one is replaced in place,
    /// matching the line a dotenv loader would take the value from.
    pub fn upsert(&mut self, key: &str, value: &str) -> Upsert {
        let line = EnvLine::assignment(key, value);
        match self.lines.iter().rposition(|l| l.key() == Some(key)) {
            Some(idx) => {
                self.lines[idx] = line;
                Upsert::Replaced(idx)
            }
            None => {
                self.lines.push(line);
                Upsert::Appended
            }
        }
    }

    /// All active assignments as an insertion-ordered map.
    #[must_use]
    pub fn values(&self) -> EnvMap {
        let mut map = EnvMap::new();
        for line in &self.lines {
            if let EnvLine::Assignment { key, value, .. } = line {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }

    #[must_use]
    pub fn lines(&self) -> &[EnvLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
