// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings command arguments.
//!
//! ```text
//! config show            effective settings after all layers
//! config files           config sources that were loaded
//! config set KEY VALUE   persist output_directory | cache_directory | archive_format
//! config reset           forget saved settings
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `config` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub subcommand: ConfigSubcommand,
}

/// Settings subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Lists all options and their effective values.
    Show,

    /// Lists the config files that were loaded.
    Files,

    /// Saves one build setting.
    Set {
        /// Setting key: output_directory, cache_directory or archive_format.
        #[arg(value_name = "KEY")]
        key: String,

        /// New value.
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Deletes the saved settings.
    Reset,
}
