// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get` and `require` commands.

use crate::access;
use crate::cli::query::{GetArgs, RequireArgs};
use crate::core::env::container::Env;
use crate::error::Result;

/// Print a variable, or the default when it is unset or empty.
pub fn run_get_command(args: &GetArgs, env: &Env) {
    println!("{}", access::get_or(env, &args.key, &args.default));
}

/// Print a variable that must be set.
///
/// # Errors
///
/// Returns `EnvError::MissingRequired` if the variable is not set.
pub fn run_require_command(args: &RequireArgs, env: &Env) -> Result<()> {
    let value = access::require(env, &args.key)?;
    println!("{value}");
    Ok(())
}
