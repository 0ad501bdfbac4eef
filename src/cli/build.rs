// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and validate command arguments.
//!
//! ```text
//! build <PROJECT> [--format zip|rar|7z] [--output DIR] [--cache DIR] [--no-progress]
//! validate <PROJECT>
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::ArchiveFormat;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Project file (JSON editor state).
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Archive format, overrides build.archive_format.
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<ArchiveFormat>,

    /// Output directory, overrides build.output_directory.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Cache directory, overrides build.cache_directory.
    #[arg(long, value_name = "DIR")]
    pub cache: Option<PathBuf>,

    /// Don't draw a progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Project file (JSON editor state).
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,
}
