// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fmmc [global options] <command>
//! build <project.json>
//! validate <project.json>
//! records {list|delete|update|restore|sort|backup|import}
//! config {show|files|set|reset}
//! version
//! ```

pub mod build;
pub mod config;
pub mod global;
pub mod records;


use crate::cli::build::{BuildArgs, ValidateArgs};
use crate::cli::config::ConfigArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::records::RecordsArgs;
use clap::{Parser, Subcommand};

/// FMM x MOD Creator
///
/// Packages mod files into a numbered folder layout and archives it.
#[derive(Debug, Parser)]
#[command(
    name = "fmmc",
    author,
    version,
    about = "FMM x MOD Creator",
    long_about = "fmm-mod-creator Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds mod packages from a project file and keeps a history\n\
                  of every build. Do `fmmc build project.json` to build, and\n\
                  `fmmc records restore <index> -o project.json` to get a past\n\
                  build back. See `fmmc <command> --help` for more information\n\
                  about a command.",
    after_help = "CONFIG FILES:\n\n\
                  Settings saved with `fmmc config set` live in the per-user\n\
                  config directory. A `fmmc.toml` in the current directory is\n\
                  loaded on top of them, followed by every --config file in the\n\
                  order given, FMMC_* environment variables (FMMC_BUILD__ARCHIVE_FORMAT=7z)\n\
                  and finally --set. Use --no-default-configs to skip saved\n\
                  settings and fmmc.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Builds a mod package from a project file.
    Build(BuildArgs),

    /// Checks a project file without building it.
    Validate(ValidateArgs),

    /// Manages the build history.
    Records(RecordsArgs),

    /// Shows and edits settings.
    Config(ConfigArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
