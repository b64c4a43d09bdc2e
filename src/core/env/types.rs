// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvKey:  case-insensitive on Windows (PATH == Path == path)
//!          exact on every other platform
//! EnvData: BTreeMap<EnvKey, String> for deterministic order
//! validate_entry(): rejects names/values no OS environment can hold
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::error::{EnvError, EnvResult};

/// An environment variable key, compared the way the host OS compares them.
#[derive(Debug, Clone)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> Cow<'_, str> {
        if cfg!(windows) {
            Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for EnvKey {}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub(super) const fn from_vars(vars: BTreeMap<EnvKey, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<EnvKey, String> {
        &mut self.vars
    }
}

/// Checks that a key/value pair can live in an OS environment block.
///
/// # Errors
///
/// Returns `EnvError::InvalidName` for empty keys or keys containing `=` or
/// NUL, and `EnvError::InvalidValue` for values containing NUL.
pub fn validate_entry(key: &str, value: &str) -> EnvResult<()> {
    let invalid_name = |reason| {
        Err(EnvError::InvalidName {
            key: key.to_string(),
            reason,
        })
    };

    if key.is_empty() {
        return invalid_name("empty name");
    }
    if key.contains('=') {
        return invalid_name("contains '='");
    }
    if key.contains('\0') {
        return invalid_name("contains NUL");
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            key: key.to_string(),
            reason: "contains NUL",
        });
    }
    Ok(())
}
