// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented `.env` syntax.
//!
//! ```text
//! content.split('\n')
//!   trim        ""        -> Blank
//!   '#'...                -> Comment
//!   no '=' / empty key    -> Malformed
//!   KEY = VALUE           -> Entry { key, strip_quotes(value) }
//! ```
//!
//! Trimming also removes a trailing `\r`, so CRLF files parse like LF files.
//! Everything here borrows from the input; nothing allocates.

/// A declaration parsed from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// 1-based line number.
    pub line: usize,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// No `=` separator, or nothing before it.
    Malformed,
    Entry { key: &'a str, value: &'a str },
}

/// Classifies one raw line.
#[must_use]
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }

    let Some((key, value)) = trimmed.split_once('=') else {
        return Line::Malformed;
    };
    let key = key.trim();
    if key.is_empty() {
        return Line::Malformed;
    }

    Line::Entry {
        key,
        value: strip_quotes(value.trim()),
    }
}

/// Removes one matching pair of surrounding `"` or `'`.
///
/// The value must be at least two characters long and start and end with
/// the same quote character. Interior quotes and backslashes are untouched.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && first == last && matches!(first, b'"' | b'\'') =>
        {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

/// Iterates over every line with its 1-based number and classification.
pub fn lines(content: &str) -> impl Iterator<Item = (usize, Line<'_>)> {
    content
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| (idx + 1, classify(raw)))
}

/// Iterates over the declarations in file order, duplicates included.
pub fn entries(content: &str) -> impl Iterator<Item = Entry<'_>> {
    lines(content).filter_map(|(line, kind)| match kind {
        Line::Entry { key, value } => Some(Entry { key, value, line }),
        _ => None,
    })
}
