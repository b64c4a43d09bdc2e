// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::SettingsSource;
use super::{ENV_PREFIX, Settings};
use crate::logging::{LogFormat, LogLevel};
use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.dotenv.path, None);
    assert!(!settings.dotenv.required);
    assert_eq!(settings.log.level, LogLevel::INFO);
    assert_eq!(settings.load_options().path(), None);
}

#[test]
fn test_parse_sections() {
    let settings = Settings::parse(
        r#"
[dotenv]
path = "/srv/app/.env"
required = true

[log]
level = 4
"#,
    )
    .unwrap();

    assert_eq!(settings.dotenv.path, Some(PathBuf::from("/srv/app/.env")));
    assert!(settings.dotenv.required);
    assert_eq!(settings.log.level, LogLevel::DEBUG);
    assert_eq!(
        settings.load_options().path(),
        Some(Path::new("/srv/app/.env"))
    );
}

#[test]
fn test_parse_log_file_format() {
    let settings = Settings::parse("[log]\nfile = \"envfile.jsonl\"\nformat = \"json\"\n").unwrap();
    assert_eq!(settings.log.file, Some(PathBuf::from("envfile.jsonl")));
    assert_eq!(settings.log.format, LogFormat::Json);
    assert!(Settings::parse("[log]\nformat = \"xml\"\n").is_err());
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(Settings::parse("[dotenv]\noverride = true\n").is_err());
    assert!(Settings::parse("[secrets]\nkey = 1\n").is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let err = Settings::parse("[log]\nlevel = 9\n").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"), "{err}");
}

#[test]
fn test_later_sources_override_earlier() {
    let settings = Settings::builder()
        .add_toml_str("[dotenv]\npath = \"base.env\"\n[log]\nlevel = 2\n")
        .add_toml_str("[dotenv]\npath = \"local.env\"\n")
        .set("log.level", 5)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.dotenv.path, Some(PathBuf::from("local.env")));
    assert_eq!(settings.log.level, LogLevel::TRACE);
}

#[test]
fn test_from_file_and_loaded_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dotenv]\nrequired = true").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert!(settings.dotenv.required);

    let loader = Settings::builder()
        .add_toml_file(file.path())
        .add_toml_file_optional("/definitely/not/here/envfile.toml");
    assert_eq!(
        loader.loaded_files(),
        [SettingsSource::File(file.path().to_path_buf())]
    );
    assert_eq!(
        loader.format_loaded_files(),
        [format!("1. [file] {}", file.path().display())]
    );
}

#[test]
fn test_missing_required_file_fails() {
    assert!(Settings::from_file("/definitely/not/here/envfile.toml").is_err());
}

#[test]
#[serial]
fn test_env_prefix_overrides_file() {
    temp_env::with_vars(
        [
            ("ENVFILE_DOTENV__PATH", Some("/from/env/.env")),
            ("ENVFILE_LOG__LEVEL", Some("1")),
        ],
        || {
            let settings = Settings::builder()
                .add_toml_str("[dotenv]\npath = \"file.env\"\n")
                .with_env_prefix(ENV_PREFIX)
                .build()
                .unwrap();

            assert_eq!(settings.dotenv.path, Some(PathBuf::from("/from/env/.env")));
            assert_eq!(settings.log.level, LogLevel::ERROR);
        },
    );
}

#[test]
fn test_format_options() {
    let settings = Settings::parse("[dotenv]\npath = \"/srv/.env\"\n").unwrap();
    assert_eq!(
        settings.format_options(),
        [
            "dotenv.path     = /srv/.env",
            "dotenv.required = false",
            "log.file        = ",
            "log.format      = text",
            "log.level       = 3",
        ]
    );
}
