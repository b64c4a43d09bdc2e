// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Namespace trait: lookup / contains / insert
//!   Env         copy-on-write BTreeMap<String, String>
//!               sources: current_env(), Env::from_map(), Env::new()
//!   ProcessEnv  std::env, process-wide
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: non-Unicode process variables are skipped on capture

pub mod container;
pub mod namespace;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are left out.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
