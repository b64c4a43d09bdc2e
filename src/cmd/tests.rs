// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::exec::resolve_program;
use super::load::{LoadStatus, LoadSummary, format_scan_report};
use super::require_loaded;
use crate::core::env::container::Env;
use crate::dotenv::{LoadOptions, LoadOutcome, LoadReport, scan};
use crate::error::{LoadError, ProcessError};

fn missing() -> LoadOutcome {
    LoadOutcome::Missing {
        path: PathBuf::from("/srv/app/.env"),
    }
}

#[test]
fn test_require_loaded_passes_missing_when_lenient() {
    let outcome = require_loaded(missing(), false).unwrap();
    assert!(matches!(outcome, LoadOutcome::Missing { .. }));
}

#[test]
fn test_require_loaded_rejects_missing_when_strict() {
    let err = require_loaded(missing(), true).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::NotFound(_))
    ));
}

#[test]
fn test_require_loaded_keeps_loaded_when_strict() {
    let outcome = require_loaded(LoadOutcome::Loaded(LoadReport::default()), true).unwrap();
    assert!(outcome.is_loaded());
}

#[test]
fn test_format_scan_report_in_line_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, b"A=1\nBROKEN\nA=2\xff\n").unwrap();

    let report = scan(&LoadOptions::from_path(&path)).unwrap();
    let lines = format_scan_report(&report);

    assert_eq!(
        lines[0],
        format!(
            "{}: 2 declarations, 1 malformed, invalid bytes replaced",
            path.display()
        )
    );
    assert_eq!(
        lines[1..],
        [
            "    1  A",
            "    2  <malformed>",
            "    3  A  (duplicate, ignored)",
        ]
    );
}

#[test]
fn test_load_summary_from_loaded() {
    let report = LoadReport {
        path: PathBuf::from("/srv/app/.env"),
        applied: vec!["FOO".into(), "BAR".into()],
        kept: vec!["HOME".into()],
        malformed: vec![4],
        lossy: false,
    };
    let summary = LoadSummary::from_outcome(&LoadOutcome::Loaded(report));

    assert_eq!(summary.status, LoadStatus::Loaded);
    assert_eq!(summary.applied_count, 2);
    assert_eq!(
        summary.format(),
        [
            "/srv/app/.env: 2 set, 1 kept, 1 malformed",
            "  + FOO",
            "  + BAR",
            "  = HOME",
        ]
    );
}

#[test]
fn test_load_summary_json_for_missing() {
    let summary = LoadSummary::from_outcome(&missing());
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["status"], "missing");
    assert_eq!(json["path"], "/srv/app/.env");
    assert_eq!(json["applied_count"], 0);
    assert!(json.get("error").is_none());
    assert_eq!(summary.format(), ["/srv/app/.env: not found, nothing loaded"]);
}

#[test]
fn test_load_summary_for_failure() {
    let outcome = LoadOutcome::Failed {
        path: Some(PathBuf::from("/srv/app/.env")),
        applied: 3,
        error: LoadError::Read {
            path: PathBuf::from("/srv/app/.env"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        },
    };
    let summary = LoadSummary::from_outcome(&outcome);

    assert_eq!(summary.status, LoadStatus::Failed);
    assert_eq!(
        summary.format(),
        ["/srv/app/.env: failed after 3 variables: failed to read env file '/srv/app/.env': permission denied"]
    );
}

#[test]
fn test_resolve_program_not_in_loaded_path() {
    let dir = TempDir::new().unwrap();
    let mut env = Env::new();
    env.set("PATH", dir.path().to_string_lossy());

    let err = resolve_program("surely-not-a-real-program", &env).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::ExecutableNotFound { name }) if name == "surely-not-a-real-program"
    ));
}

#[cfg(unix)]
mod unix {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::PermissionsExt;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitCode, ExitStatus};

    use serial_test::serial;
    use tempfile::TempDir;

    use crate::cli::query::ExecArgs;
    use crate::cmd::exec::{exit_status_code, resolve_program, run_exec_command};
    use crate::core::env::container::Env;

    #[test]
    fn test_resolve_program_uses_loaded_path() {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("envfile-test-tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut env = Env::new();
        env.set("PATH", dir.path().to_string_lossy());

        assert_eq!(resolve_program("envfile-test-tool", &env).unwrap(), tool);
    }

    #[test]
    fn test_exit_status_code() {
        assert_eq!(exit_status_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_status_code(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(exit_status_code(ExitStatus::from_raw(9)), 137);
    }

    #[tokio::test]
    async fn test_exec_child_sees_loaded_env() {
        let mut env = crate::core::env::current_env();
        env.set("_ENVFILE_EXEC_MARKER", "yes");
        let args = ExecArgs {
            strict: false,
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "test \"$_ENVFILE_EXEC_MARKER\" = yes && exit 7".to_string(),
            ],
        };

        let code = run_exec_command(&args, &env).await.unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(7)));
    }

    #[test]
    #[serial]
    fn test_exec_child_keeps_non_unicode_variables() {
        let raw = OsStr::from_bytes(b"caf\xe9");
        temp_env::with_var("_ENVFILE_EXEC_RAW", Some(raw), || {
            let env = crate::core::env::current_env();
            assert_eq!(env.get("_ENVFILE_EXEC_RAW"), None);

            let args = ExecArgs {
                strict: false,
                program: "sh".to_string(),
                args: vec![
                    "-c".to_string(),
                    "test -n \"$_ENVFILE_EXEC_RAW\" && exit 9".to_string(),
                ],
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let code = runtime.block_on(run_exec_command(&args, &env)).unwrap();
            assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(9)));
        });
    }
}
