// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the `envfile` command.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envfile.toml (cwd, optional)
//! 3. --config FILE
//! 4. ENVFILE_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVFILE_DOTENV__PATH=/srv/.env  → dotenv.path = "/srv/.env"
//! ENVFILE_DOTENV__REQUIRED=true   → dotenv.required = true
//! ENVFILE_LOG__LEVEL=4            → log.level = 4
//! ENVFILE_LOG__FORMAT=json        → log.format = "json"
//! ```
//!
//! These are read from the real process environment, before any env file
//! is loaded.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::dotenv::LoadOptions;
use crate::error::Result;

use loader::SettingsLoader;
use types::{DotenvSettings, LogSettings};

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "envfile.toml";

/// Prefix for settings taken from environment variables.
pub const ENV_PREFIX: &str = "ENVFILE";

/// Complete settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub dotenv: DotenvSettings,
    pub log: LogSettings,
}

impl Settings {
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match `Settings`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// `Settings`.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Options for loading the configured env file.
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::builder()
            .maybe_with_path(self.dotenv.path.clone())
            .build()
    }

    /// Format settings for display, one `key = value` line each, sorted.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let display = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        let mut options = BTreeMap::new();
        options.insert("dotenv.path", display(self.dotenv.path.as_deref()));
        options.insert("dotenv.required", self.dotenv.required.to_string());
        options.insert("log.level", self.log.level.as_u8().to_string());
        options.insert("log.file", display(self.log.file.as_deref()));
        options.insert("log.format", self.log.format.as_str().to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
