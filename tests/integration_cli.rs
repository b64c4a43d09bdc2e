// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and settings layering.

use clap::Parser;
use envfile_rs::cli::{Cli, Command};
use envfile_rs::config::loader::SettingsLoader;
use envfile_rs::logging::LogLevel;
use std::path::Path;

fn settings_from_args(args: &[&str]) -> envfile_rs::config::Settings {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut loader =
        SettingsLoader::new().add_toml_str("[dotenv]\npath = \"from-file.env\"\n[log]\nlevel = 2\n");
    for (key, value) in cli.global.to_settings_overrides() {
        loader = loader.set(key, value).unwrap();
    }
    loader.build().unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envfile"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["envfile", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_check_json() {
    let cli = Cli::try_parse_from(["envfile", "check", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Check(args)) if args.json));
}

#[test]
fn cli_require_needs_key() {
    assert!(Cli::try_parse_from(["envfile", "require"]).is_err());
}

#[test]
fn cli_exec_after_double_dash() {
    let cli = Cli::try_parse_from(["envfile", "-f", "ci.env", "exec", "--strict", "--", "env", "-0"])
        .unwrap();

    assert_eq!(cli.global.file.as_deref(), Some(Path::new("ci.env")));
    match cli.command {
        Some(Command::Exec(args)) => {
            assert!(args.strict);
            assert_eq!(args.program, "env");
            assert_eq!(args.args, ["-0"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["envfile", "build"]).is_err());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn flags_override_settings_file() {
    let settings = settings_from_args(&["envfile", "-f", "cli.env", "-l", "5", "load"]);

    assert_eq!(settings.dotenv.path.as_deref(), Some(Path::new("cli.env")));
    assert_eq!(settings.log.level, LogLevel::TRACE);
}

#[test]
fn settings_file_used_without_flags() {
    let settings = settings_from_args(&["envfile", "load"]);

    assert_eq!(
        settings.dotenv.path.as_deref(),
        Some(Path::new("from-file.env"))
    );
    assert_eq!(settings.log.level, LogLevel::WARN);
    assert_eq!(settings.log.file, None);
}
