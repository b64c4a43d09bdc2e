// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envfile [global options] <command>
//! version
//! options | settings
//! check [--json]
//! load [--strict] [--json]
//! get KEY [-d DEFAULT]
//! require KEY
//! exec [--strict] PROGRAM [ARGS...]
//! ```

pub mod global;
pub mod load;
pub mod query;


use crate::cli::global::GlobalOptions;
use crate::cli::load::{CheckArgs, LoadArgs};
use crate::cli::query::{ExecArgs, GetArgs, RequireArgs};
use clap::{Parser, Subcommand};

/// .env loader and environment accessors.
#[derive(Debug, Parser)]
#[command(
    name = "envfile",
    author,
    version,
    about = "Load .env files without overwriting the environment",
    long_about = "envfile-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads KEY=VALUE lines from an env file and merges them into a\n\
                  snapshot of the current environment. Variables that are already\n\
                  set are never overwritten, and the first declaration in the file\n\
                  wins over later ones.",
    after_help = "SETTINGS:\n\n\
                  envfile reads `envfile.toml` from the current directory if it\n\
                  exists, then the file given with --config, then ENVFILE_*\n\
                  variables (ENVFILE_DOTENV__PATH, ENVFILE_LOG__LEVEL, ...), then\n\
                  command-line flags. Use `envfile options` to see the result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists the effective settings.
    Options,

    /// Lists the settings files used.
    Settings,

    /// Parses the env file without applying it.
    Check(CheckArgs),

    /// Loads the env file and reports which variables it set.
    Load(LoadArgs),

    /// Prints a variable, or a default when unset or empty.
    Get(GetArgs),

    /// Prints a variable, failing when it is unset.
    Require(RequireArgs),

    /// Runs a program with the loaded environment.
    Exec(ExecArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
