// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>> + owned flag
//! clone shares Arc until copy_for_write()
//! ```
//!
//! `Env` is the explicit configuration context: build it once at start-up,
//! load the env file into it, then hand out clones.

use super::namespace::Namespace;
use super::types::{EnvData, EnvKey, validate_entry};
use crate::error::EnvResult;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Clones share data until one of them is modified.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone)]
pub struct Env {
    data: Option<Arc<EnvData>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self {
            data: Some(Arc::new(data)),
            owned: true,
        }
    }

    /// Sets an environment variable, replacing any existing value.
    ///
    /// No validation happens here; [`Namespace::insert`] is the checked path.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            Arc::make_mut(data)
                .vars_mut()
                .insert(EnvKey::new(key.into()), value.into());
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.as_ref().and_then(|d| {
            d.vars()
                .get(&EnvKey::new(key))
                .map(std::string::String::as_str)
        })
    }

    /// Returns true if the key is set, even to an empty value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data
            .as_ref()
            .is_some_and(|d| d.vars().contains_key(&EnvKey::new(key)))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            Arc::make_mut(data).vars_mut().remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Ensures we have exclusive ownership of the data for modification.
    fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        self.data = Some(Arc::new(
            self.data
                .as_deref()
                .cloned()
                .unwrap_or_else(EnvData::new),
        ));
        self.owned = true;
    }
}

impl Namespace for Env {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }

    fn contains(&self, key: &str) -> bool {
        Self::contains(self, key)
    }

    fn insert(&mut self, key: &str, value: &str) -> EnvResult<()> {
        validate_entry(key, value)?;
        self.set(key, value);
        Ok(())
    }
}
