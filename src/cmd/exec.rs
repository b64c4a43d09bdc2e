// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exec` command.
//!
//! ```text
//! which_in(program, Env["PATH"], cwd)
//!        |
//!        v
//! tokio Command  process env + Env vars on top, inherited stdio
//!        |
//!        v
//! status().await --> ExitCode (code, or 128 + signal on Unix)
//! ```
//!
//! The child inherits the `envfile` process environment, including entries
//! that are not valid Unicode and so are absent from [`Env`], and every
//! [`Env`] variable is set on top. The `envfile` process environment itself
//! is not modified.

use std::path::PathBuf;
use std::process::{ExitCode, ExitStatus};

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::cli::query::ExecArgs;
use crate::core::env::container::Env;
use crate::error::{ProcessError, Result};

/// Run a program with the loaded environment and return its exit code.
///
/// # Errors
///
/// Returns an error if the program cannot be found in the loaded `PATH`,
/// or cannot be spawned.
pub async fn run_exec_command(args: &ExecArgs, env: &Env) -> Result<ExitCode> {
    let program = resolve_program(&args.program, env)?;
    debug!(program = %program.display(), args = ?args.args, "exec");

    let status = Command::new(&program)
        .args(&args.args)
        .envs(env.iter())
        .status()
        .await
        .map_err(|source| ProcessError::SpawnFailed {
            command: args.program.clone(),
            source,
        })?;

    trace!(program = %program.display(), ?status, "exited");
    Ok(exit_code(status))
}

/// Resolves `program` against the `PATH` of `env`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if nothing matches.
pub fn resolve_program(program: &str, env: &Env) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let path = which::which_in(program, env.get("PATH"), cwd).map_err(|_| {
        ProcessError::ExecutableNotFound {
            name: program.to_string(),
        }
    })?;
    Ok(path)
}

/// Maps a child's exit status to ours.
#[must_use]
pub fn exit_code(status: ExitStatus) -> ExitCode {
    ExitCode::from(exit_status_code(status))
}

/// The child's exit code, `128 + signal` when killed on Unix, otherwise 1.
/// Codes outside `0..=255` also become 1.
#[must_use]
pub fn exit_status_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
