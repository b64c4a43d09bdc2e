// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        check / load / get / exec
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!      dotenv (load_into / load / load_context / scan)
//!        parser          decode            access
//!      KEY=VALUE      BOM, UTF-8/16     get_or / require
//!                            |
//!                            v
//!   +-----------------------------------------+
//!   |  core::env   Namespace, Env, ProcessEnv |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Library Use
//!
//! ```no_run
//! use envfile_rs::access;
//! use envfile_rs::dotenv::{self, LoadOptions};
//!
//! dotenv::load(&LoadOptions::default());
//! let host = access::get("DB_HOST", "localhost");
//! let secret = access::require_env("SESSION_SECRET")?;
//! # Ok::<(), envfile_rs::error::EnvError>(())
//! ```

pub mod access;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod dotenv;
pub mod error;
pub mod logging;
