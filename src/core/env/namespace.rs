// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The namespace seam between the loader and where variables live.
//!
//! ```text
//! Namespace (lookup / contains / insert)
//!   |-- Env         explicit context object, copy-on-write
//!   '-- ProcessEnv  the real process environment (ambient)
//! ```

use std::borrow::Cow;

use super::types::validate_entry;
use crate::error::EnvResult;

/// A string-to-string mapping the loader can merge into.
pub trait Namespace {
    /// Returns the current value for `key`, if set.
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Returns true if `key` is set, including to an empty value.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Sets `key` to `value`.
    ///
    /// # Errors
    ///
    /// Returns an `EnvError` if the namespace cannot hold the pair.
    fn insert(&mut self, key: &str, value: &str) -> EnvResult<()>;
}

/// The environment of the running process.
///
/// Reads never fail. Values that are not valid Unicode are returned lossily.
/// Writes go through [`std::env::set_var`] and carry its threading caveat:
/// call [`ProcessEnv::insert`] only while no other thread touches the
/// environment, which in practice means during start-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Namespace for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| Cow::Owned(value.to_string_lossy().into_owned()))
    }

    fn contains(&self, key: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0']) && std::env::var_os(key).is_some()
    }

    fn insert(&mut self, key: &str, value: &str) -> EnvResult<()> {
        validate_entry(key, value)?;
        // SAFETY: key and value were validated above, and the loader is only
        // run before the process spawns threads that read the environment.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }
}
