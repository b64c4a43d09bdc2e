// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get`, `require` and `exec` command arguments.

use clap::Args;

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    pub key: String,

    /// Printed when the variable is unset or empty.
    #[arg(short = 'd', long = "default", value_name = "VALUE", default_value = "")]
    pub default: String,
}

/// Arguments for the `require` command.
#[derive(Debug, Clone, Args)]
pub struct RequireArgs {
    /// Variable name.
    pub key: String,
}

/// Arguments for the `exec` command.
///
/// The program inherits the current environment with the loaded variables
/// added.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Fail instead of running when the env file is missing or unreadable.
    #[arg(long)]
    pub strict: bool,

    /// Program to run, resolved against the loaded PATH.
    pub program: String,

    /// Arguments passed to the program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
