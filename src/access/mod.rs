// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading configuration back out of a namespace.
//!
//! ```text
//!               unset     ""        "value"
//! get_or        default   default   "value"
//! require       Err       ""        "value"
//! ```
//!
//! `get` and `require_env` are the same lookups against [`ProcessEnv`].

use crate::core::env::namespace::{Namespace, ProcessEnv};
use crate::error::{EnvError, EnvResult};

/// Returns the value of `key`, or `default` when it is unset or empty.
#[must_use]
pub fn get_or<N: Namespace + ?Sized>(namespace: &N, key: &str, default: &str) -> String {
    match namespace.lookup(key) {
        Some(value) if !value.is_empty() => value.into_owned(),
        _ => default.to_owned(),
    }
}

/// Returns the value of `key`. An empty value is returned as is.
///
/// # Errors
///
/// Returns `EnvError::MissingRequired` when `key` is not set.
pub fn require<N: Namespace + ?Sized>(namespace: &N, key: &str) -> EnvResult<String> {
    namespace
        .lookup(key)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| EnvError::missing(key))
}

/// [`get_or`] against the process environment.
///
/// # Example
///
/// ```
/// assert_eq!(envfile_rs::access::get("_SURELY_NOT_SET_ANYWHERE", "fallback"), "fallback");
/// ```
#[must_use]
pub fn get(key: &str, default: &str) -> String {
    get_or(&ProcessEnv, key, default)
}

/// [`require`] against the process environment.
///
/// # Errors
///
/// Returns `EnvError::MissingRequired` when `key` is not set.
pub fn require_env(key: &str) -> EnvResult<String> {
    require(&ProcessEnv, key)
}
