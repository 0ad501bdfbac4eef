// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-record command arguments.
//!
//! # Subcommands
//!
//! ```text
//! records list
//! records delete <INDEX>
//! records update <BUILD_TIME> [--name] [--author] [--category] [--version]
//! records restore <INDEX> [-o FILE]
//! records sort --by name|author|category|date [--desc]
//! records backup [--dest DIR]
//! records import <ZIP>
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::record::store::{ModInfoPatch, SortKey};

/// Arguments for the `records` command.
#[derive(Debug, Clone, Args)]
pub struct RecordsArgs {
    /// Record subcommand.
    #[command(subcommand)]
    pub subcommand: RecordsSubcommand,
}

/// Record subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RecordsSubcommand {
    /// Lists all build records with their index.
    List,

    /// Deletes the record at INDEX.
    Delete {
        /// Zero-based record index, as shown by `records list`.
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Edits mod info of the record built at BUILD_TIME.
    Update(UpdateArgs),

    /// Writes the project of the record at INDEX as a project file.
    Restore {
        /// Zero-based record index.
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Destination project file. Prints to stdout when omitted.
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Sorts the record file in place.
    Sort {
        /// Sort key.
        #[arg(long = "by", value_name = "KEY", default_value = "date")]
        key: SortKey,

        /// Sort descending.
        #[arg(long)]
        desc: bool,
    },

    /// Writes a zip backup of the record file.
    Backup {
        /// Destination directory. Defaults to the output directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Replaces the record file with the one in a backup zip.
    Import {
        /// Backup zip.
        #[arg(value_name = "ZIP")]
        backup: PathBuf,
    },
}

/// Arguments for `records update`.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// `build_info.build_time` of the record to edit.
    #[arg(value_name = "BUILD_TIME")]
    pub build_time: String,

    /// New mod name.
    #[arg(long)]
    pub name: Option<String>,

    /// New author.
    #[arg(long)]
    pub author: Option<String>,

    /// New category.
    #[arg(long)]
    pub category: Option<String>,

    /// New version.
    #[arg(long = "mod-version", value_name = "VERSION")]
    pub version: Option<String>,
}

impl UpdateArgs {
    #[must_use]
    pub fn patch(&self) -> ModInfoPatch {
        ModInfoPatch {
            name: self.name.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            version: self.version.clone(),
        }
    }
}
