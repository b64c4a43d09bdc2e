// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> load_context() --> Command Dispatch
//!   Version | Options | Settings | Check | Load | Get | Require | Exec
//! ```

use std::process::ExitCode;

use envfile_rs::cli::global::GlobalOptions;
use envfile_rs::cli::{self, Command};
use envfile_rs::cmd::exec::run_exec_command;
use envfile_rs::cmd::load::{run_check_command, run_load_command};
use envfile_rs::cmd::query::{run_get_command, run_require_command};
use envfile_rs::cmd::require_loaded;
use envfile_rs::cmd::settings::{run_options_command, run_settings_command};
use envfile_rs::config::loader::SettingsLoader;
use envfile_rs::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings};
use envfile_rs::core::env::container::Env;
use envfile_rs::dotenv::{self, LoadOutcome};
use envfile_rs::error::Result;
use envfile_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_settings_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let settings_files = loader.format_loaded_files();
    let settings = match loader.build() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, &settings, &settings_files).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_settings_loader(global: &GlobalOptions) -> Result<SettingsLoader> {
    let mut loader = SettingsLoader::new().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    let mut loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_settings_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_level(settings.log.level)
        .maybe_with_file(settings.log.file.clone())
        .with_file_format(settings.log.format)
        .build()
}

/// Loads the configured env file into a snapshot of the process environment.
fn load_env(settings: &Settings, strict: bool) -> Result<(Env, LoadOutcome)> {
    let (env, outcome) = dotenv::load_context(&settings.load_options());
    outcome.log();
    let outcome = require_loaded(outcome, strict || settings.dotenv.required)?;
    Ok((env, outcome))
}

async fn dispatch_command(
    cli: &cli::Cli,
    settings: &Settings,
    settings_files: &[String],
) -> Result<ExitCode> {
    match &cli.command {
        Some(Command::Version) => handle_version_command(),
        Some(Command::Options) => run_options_command(settings),
        Some(Command::Settings) => run_settings_command(settings_files),
        Some(Command::Check(args)) => run_check_command(args, &settings.load_options())?,
        Some(Command::Load(args)) => {
            let (_, outcome) = load_env(settings, args.strict)?;
            run_load_command(args, &outcome)?;
        }
        Some(Command::Get(args)) => {
            let (env, _) = load_env(settings, false)?;
            run_get_command(args, &env);
        }
        Some(Command::Require(args)) => {
            let (env, _) = load_env(settings, false)?;
            run_require_command(args, &env)?;
        }
        Some(Command::Exec(args)) => {
            let (env, _) = load_env(settings, args.strict)?;
            return run_exec_command(args, &env).await;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            anyhow::bail!("No command specified");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
