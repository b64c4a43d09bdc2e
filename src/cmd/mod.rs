// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! main: settings --> load_context() --> outcome.log()
//!                          |
//!                  (Env, LoadOutcome)
//!                          |
//!                 require_loaded(strict)
//!                          |
//!   check | load | get | require | exec | options | settings
//! ```
//!
//! Handlers print results to stdout. Diagnostics stay on the tracing
//! subscriber, which writes to stderr.

pub mod exec;
pub mod load;
pub mod query;
pub mod settings;

#[cfg(test)]
mod tests;

use anyhow::anyhow;

use crate::dotenv::LoadOutcome;
use crate::error::Result;

/// Turns a missing or failed load into an error when `strict` is set.
///
/// # Errors
///
/// Returns the load failure, or `LoadError::NotFound` for a missing file,
/// when `strict` is set and the outcome is not `Loaded`.
pub fn require_loaded(outcome: LoadOutcome, strict: bool) -> Result<LoadOutcome> {
    if !strict || outcome.is_loaded() {
        return Ok(outcome);
    }
    match outcome.into_result() {
        Ok(_) => Err(anyhow!("env file was not loaded")),
        Err(e) => Err(e.into()),
    }
}
