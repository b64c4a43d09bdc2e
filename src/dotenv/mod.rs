// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file loading.
//!
//! # Load Pipeline
//!
//! ```text
//! LoadOptions { path }            default: $CWD/.env
//!        |
//!        v
//! resolve_path() --> fs::read --> decode (BOM aware, U+FFFD)
//!        |              |            |
//!   WorkingDir       NotFound?    lossy flag
//!     Failed         Missing         |
//!                                    v
//!                     parser::lines() in file order
//!                       present in namespace? --> kept
//!                       otherwise insert       --> applied
//!                                    |
//!                                    v
//!                   LoadOutcome::Loaded(LoadReport)
//! ```
//!
//! Loading never returns `Err` and never panics. The first value for a key
//! wins: a variable set before the load, or earlier in the same file, is
//! never overwritten. Insert failures stop the pass without rolling back
//! keys already applied.

mod decode;
pub mod parser;


use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Serialize;
use tracing::{debug, error, trace, warn};

use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::namespace::{Namespace, ProcessEnv};
use crate::error::LoadError;
use parser::Line;

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// Options for a single load.
#[derive(Debug, Clone, Default, Builder)]
pub struct LoadOptions {
    /// Absolute, or relative to the working directory.
    #[builder(into, setters(name = with_path))]
    path: Option<PathBuf>,
}

impl LoadOptions {
    /// Options for an explicit file.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::builder().with_path(path).build()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the absolute path this load reads.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::WorkingDir` if the path is relative (or unset) and
    /// the working directory cannot be determined.
    pub fn resolve_path(&self) -> Result<PathBuf, LoadError> {
        match &self.path {
            Some(path) if path.is_absolute() => Ok(path.clone()),
            Some(path) => Ok(working_dir()?.join(path)),
            None => Ok(working_dir()?.join(DEFAULT_FILE_NAME)),
        }
    }
}

fn working_dir() -> Result<PathBuf, LoadError> {
    std::env::current_dir().map_err(LoadError::WorkingDir)
}

/// What a successful load did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The file that was read.
    pub path: PathBuf,
    /// Keys newly set by this load, in file order.
    pub applied: Vec<String>,
    /// Keys found in the file but left alone because they were already set.
    pub kept: Vec<String>,
    /// Line numbers without a `KEY=` declaration.
    pub malformed: Vec<usize>,
    /// Invalid byte sequences were replaced with U+FFFD.
    pub lossy: bool,
}

impl LoadReport {
    #[must_use]
    pub const fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

/// Result of a load. Every fault is a variant here, never a panic or `Err`.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and merged.
    Loaded(LoadReport),
    /// Nothing exists at the resolved path; the namespace is untouched.
    Missing { path: PathBuf },
    /// The load stopped early. `applied` keys stay set.
    Failed {
        path: Option<PathBuf>,
        applied: usize,
        error: LoadError,
    },
}

impl LoadOutcome {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loaded(report) => Some(report.path.as_path()),
            Self::Missing { path } => Some(path.as_path()),
            Self::Failed { path, .. } => path.as_deref(),
        }
    }

    /// Number of variables this load set.
    #[must_use]
    pub const fn applied_count(&self) -> usize {
        match self {
            Self::Loaded(report) => report.applied_count(),
            Self::Missing { .. } => 0,
            Self::Failed { applied, .. } => *applied,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Emits the load diagnostics.
    ///
    /// Missing files warn, failures log an error, success is a debug summary.
    /// A lossy decode also warns.
    pub fn log(&self) {
        match self {
            Self::Loaded(report) => {
                if report.lossy {
                    warn!(
                        path = %report.path.display(),
                        "env file has invalid byte sequences, replaced with U+FFFD"
                    );
                }
                debug!(
                    path = %report.path.display(),
                    loaded = report.applied.len(),
                    kept = report.kept.len(),
                    malformed = report.malformed.len(),
                    "loaded env file"
                );
            }
            Self::Missing { path } => warn!(path = %path.display(), "env file not found"),
            Self::Failed { applied, error, .. } => {
                error!(applied = *applied, error = %error, "error loading env file");
            }
        }
    }

    /// Escalates `Missing` and `Failed` into an error.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` for a missing file, or the failure reason.
    pub fn into_result(self) -> Result<LoadReport, LoadError> {
        match self {
            Self::Loaded(report) => Ok(report),
            Self::Missing { path } => Err(LoadError::NotFound(path)),
            Self::Failed { error, .. } => Err(error),
        }
    }
}

/// Loads an env file into `namespace` without overwriting existing keys.
///
/// Logs nothing above `trace`; call [`LoadOutcome::log`] for diagnostics.
#[must_use]
pub fn load_into<N: Namespace + ?Sized>(options: &LoadOptions, namespace: &mut N) -> LoadOutcome {
    let path = match options.resolve_path() {
        Ok(path) => path,
        Err(error) => {
            return LoadOutcome::Failed {
                path: None,
                applied: 0,
                error,
            };
        }
    };

    let source = match read_source(&path) {
        Ok(Some(source)) => source,
        Ok(None) => return LoadOutcome::Missing { path },
        Err(error) => {
            return LoadOutcome::Failed {
                path: Some(path),
                applied: 0,
                error,
            };
        }
    };

    apply(path, source, namespace)
}

/// Loads an env file into the process environment and logs the outcome.
///
/// Run this during start-up, before other threads read the environment.
/// A missing or unreadable file never stops the caller.
///
/// # Example
///
/// ```no_run
/// use envfile_rs::dotenv::{self, LoadOptions};
///
/// dotenv::load(&LoadOptions::default());
/// let port = envfile_rs::access::get("PORT", "8080");
/// ```
#[allow(clippy::must_use_candidate)]
pub fn load(options: &LoadOptions) -> LoadOutcome {
    let outcome = load_into(options, &mut ProcessEnv);
    outcome.log();
    outcome
}

/// Captures the process environment into an [`Env`] and loads the file
/// into that copy. The process environment itself is not modified.
#[must_use]
pub fn load_context(options: &LoadOptions) -> (Env, LoadOutcome) {
    let mut env = current_env();
    let outcome = load_into(options, &mut env);
    (env, outcome)
}

/// One declaration found by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedKey {
    pub key: String,
    pub line: usize,
    /// An earlier line already declared this key.
    pub duplicate: bool,
}

/// The declarations of a file, without applying them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub path: PathBuf,
    pub keys: Vec<ScannedKey>,
    pub malformed: Vec<usize>,
    pub lossy: bool,
}

/// Parses an env file without touching any namespace.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist, or the read
/// failure.
pub fn scan(options: &LoadOptions) -> Result<ScanReport, LoadError> {
    let path = options.resolve_path()?;
    let source = read_source(&path)?.ok_or_else(|| LoadError::NotFound(path.clone()))?;

    let mut seen = Env::new();
    let mut keys = Vec::new();
    let mut malformed = Vec::new();
    for (line, kind) in parser::lines(&source.text) {
        match kind {
            Line::Entry { key, .. } => {
                let duplicate = seen.contains(key);
                seen.set(key, "");
                keys.push(ScannedKey {
                    key: key.to_owned(),
                    line,
                    duplicate,
                });
            }
            Line::Malformed => malformed.push(line),
            Line::Blank | Line::Comment => {}
        }
    }

    Ok(ScanReport {
        path,
        keys,
        malformed,
        lossy: source.lossy,
    })
}

/// Decoded file content.
struct Source {
    text: String,
    lossy: bool,
}

/// Reads and decodes a file; `Ok(None)` if it does not exist.
fn read_source(path: &Path) -> Result<Option<Source>, LoadError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let decoded = decode::decode(&bytes);
    trace!(
        encoding = decoded.encoding,
        lossy = decoded.lossy,
        "decoded env file"
    );
    Ok(Some(Source {
        text: decoded.text.into_owned(),
        lossy: decoded.lossy,
    }))
}

fn apply<N: Namespace + ?Sized>(path: PathBuf, source: Source, namespace: &mut N) -> LoadOutcome {
    let mut report = LoadReport {
        path,
        lossy: source.lossy,
        ..LoadReport::default()
    };

    for (line, kind) in parser::lines(&source.text) {
        match kind {
            Line::Blank | Line::Comment => {}
            Line::Malformed => {
                trace!(line, "skipping line without a key");
                report.malformed.push(line);
            }
            Line::Entry { key, value } => {
                if namespace.contains(key) {
                    trace!(key, line, "keeping existing value");
                    report.kept.push(key.to_owned());
                    continue;
                }
                if let Err(source) = namespace.insert(key, value) {
                    return LoadOutcome::Failed {
                        path: Some(report.path.clone()),
                        applied: report.applied.len(),
                        error: LoadError::Apply {
                            path: report.path,
                            line,
                            source,
                        },
                    };
                }
                report.applied.push(key.to_owned());
            }
        }
    }

    LoadOutcome::Loaded(report)
}
