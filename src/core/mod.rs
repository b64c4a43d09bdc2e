// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules.
//!
//! ```text
//!      core
//!       |
//!       v
//!      env
//!       |
//!   Namespace, Env, ProcessEnv
//! ```

pub mod env;
