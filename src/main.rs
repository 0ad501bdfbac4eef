// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Build | Validate | Records | Config | Version
//! ```

use std::process::ExitCode;

use anyhow::anyhow;
use fmm_mod_creator::cli::global::GlobalOptions;
use fmm_mod_creator::cli::{self, Command};
use fmm_mod_creator::cmd::build::{run_build_command, run_validate_command};
use fmm_mod_creator::cmd::config::run_config_command;
use fmm_mod_creator::cmd::records::run_records_command;
use fmm_mod_creator::config::Config;
use fmm_mod_creator::config::loader::ConfigLoader;
use fmm_mod_creator::config::store::JsonSettingsStore;
use fmm_mod_creator::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const LOCAL_CONFIG_FILE: &str = "fmmc.toml";
const ENV_PREFIX: &str = "FMMC";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config, &cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config, global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(global.log_json)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Build(args)) => run_build_command(args, config).await,
        Some(Command::Validate(args)) => run_validate_command(args),
        Some(Command::Records(args)) => run_records_command(args, config),
        Some(Command::Config(args)) => {
            let loader = build_config_loader(&cli.global);
            run_config_command(
                args,
                config,
                &loader.format_loaded_files(),
                &JsonSettingsStore::default_location(),
            )
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_configs {
        loader = loader
            .add_json_file_optional(JsonSettingsStore::default_location().path())
            .add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> fmm_mod_creator::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        let (key, value) = option
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid option '{option}', expected KEY=VALUE"))?;
        loader = loader.set(key.trim(), value.trim())?;
    }
    loader.build()
}
