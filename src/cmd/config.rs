// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use crate::cli::config::{ConfigArgs, ConfigSubcommand};
use crate::config::Config;
use crate::config::store::{JsonSettingsStore, SettingsStore};
use crate::error::Result;

/// Main handler for config command.
///
/// `loaded_files` is the formatted list of config sources behind `config`.
///
/// # Errors
///
/// Returns an error if saved settings cannot be read or written, or the key
/// or value of `config set` is rejected.
pub fn run_config_command(
    args: &ConfigArgs,
    config: &Config,
    loaded_files: &[String],
    store: &JsonSettingsStore,
) -> Result<()> {
    match &args.subcommand {
        ConfigSubcommand::Show => run_options_command(config),
        ConfigSubcommand::Files => run_files_command(loaded_files),
        ConfigSubcommand::Set { key, value } => {
            save_setting(store, key, value)?;
            println!("{key} = {value}");
            println!("saved to {}", store.path().display());
        }
        ConfigSubcommand::Reset => {
            store.reset()?;
            println!("Settings reset to defaults");
        }
    }
    Ok(())
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_files_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

/// Applies one setting on top of the saved settings and persists them.
///
/// Only the saved layer is touched; `fmmc.toml`, environment and command-line
/// overrides stay out of the file.
///
/// # Errors
///
/// Returns an error if the saved settings cannot be loaded or written, or the
/// key or value is invalid.
pub fn save_setting(store: &dyn SettingsStore, key: &str, value: &str) -> Result<Config> {
    let mut saved = store.load()?;
    saved.set_setting(key, value)?;
    store.save(&saved)?;
    tracing::info!(key, value, "Setting saved");
    Ok(saved)
}
