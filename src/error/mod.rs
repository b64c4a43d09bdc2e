// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result  (application code, cmd handlers, main)
//!        ^
//!        | ? / context
//!   +--------+-------+---------+
//!   |        |       |         |
//!  Env     Load    Config   Process      thiserror enums
//!
//!   Env     MissingRequired, InvalidName, InvalidValue
//!   Load    WorkingDir, Read, Apply, NotFound
//!   Config  ParseError, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed
//! ```
//!
//! Loading an env file never surfaces a [`LoadError`] on its own; the loader
//! wraps it in a `LoadOutcome` and callers decide whether to escalate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

// --- Environment Errors ---

/// Errors raised by environment namespaces and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A variable with no sensible default is not set.
    #[error("missing required environment variable: {key}")]
    MissingRequired { key: String },

    /// The key cannot be stored in the namespace.
    #[error("invalid environment variable name '{key}': {reason}")]
    InvalidName { key: String, reason: &'static str },

    /// The value cannot be stored in the namespace.
    #[error("invalid value for environment variable '{key}': {reason}")]
    InvalidValue { key: String, reason: &'static str },
}

impl EnvError {
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequired { key: key.into() }
    }
}

// --- Load Errors ---

/// Reasons an env file load stopped early.
///
/// Messages never include raw values from the file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The working directory needed to resolve a relative path is unavailable.
    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The file exists but could not be read.
    #[error("failed to read env file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A parsed entry was rejected by the namespace.
    #[error("failed to apply line {line} of '{}': {source}", .path.display())]
    Apply {
        path: PathBuf,
        line: usize,
        #[source]
        source: EnvError,
    },

    /// The file does not exist. Only produced by `LoadOutcome::into_result`.
    #[error("env file not found: {}", .0.display())]
    NotFound(PathBuf),
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a settings source.
    #[error("failed to parse settings: {message}")]
    ParseError { message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Child process errors for `exec`.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in the loaded PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn or wait on the process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
