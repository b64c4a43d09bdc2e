// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file_optional("envfile.toml")
//!   .add_toml_file(--config)
//!   .with_env_prefix("ENVFILE")      ENVFILE_LOG__LEVEL=4
//!   .set("log.level", ..)            CLI flags
//!        |
//!        v
//!    build() --> Settings
//! ```
//!
//! Later sources win. Environment variables are added last in `build()`,
//! so only `set` overrides them.

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Settings;
use crate::error::{ConfigError, Result};

/// A settings source that contributed to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A file that had to exist.
    File(PathBuf),
    /// An optional file that existed when it was added.
    OptionalFile(PathBuf),
    /// Inline TOML.
    Inline,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <inline>"),
        }
    }
}

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<SettingsSource>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML settings file that must exist.
    ///
    /// The file is read by `build()`, which fails if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.add_file(path, true, Some(SettingsSource::File(path.to_path_buf())))
    }

    /// Adds a TOML settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let source = path
            .exists()
            .then(|| SettingsSource::OptionalFile(path.to_path_buf()));
        self.add_file(path, false, source)
    }

    fn add_file(mut self, path: &Path, required: bool, source: Option<SettingsSource>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.extend(source);
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(SettingsSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g. `ENVFILE_DOTENV__PATH`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an override applied after every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid settings path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::ParseError {
                message: format!("override '{key}': {e}"),
            })?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required settings file is missing.
    /// - A settings file has invalid TOML syntax.
    /// - The merged values do not match the `Settings` structure.
    pub fn build(self) -> Result<Settings> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let settings = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Settings>())
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[SettingsSource] {
        &self.sources
    }

    /// One numbered line per source, in load order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
