// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `load` and `check` command arguments.

use clap::Args;

/// Arguments for the `load` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LoadArgs {
    /// Fail when the env file is missing or unreadable.
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
