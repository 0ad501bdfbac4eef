// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-record command implementation.

use anyhow::{Context, bail};

use crate::cli::records::{RecordsArgs, RecordsSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::record::BuildRecord;
use crate::record::restore::restore;
use crate::record::store::{BuildRecordStore, SortDirection};

/// Main handler for records command.
///
/// # Errors
///
/// Returns an error if the record file cannot be read or rewritten, or the
/// addressed record does not exist.
pub fn run_records_command(args: &RecordsArgs, config: &Config) -> Result<()> {
    let store = BuildRecordStore::new(config.build.record_file());
    tracing::debug!(path = %store.path().display(), "Using record store");

    match &args.subcommand {
        RecordsSubcommand::List => {
            let records = store.list_all();
            if records.is_empty() {
                println!("No build records");
            }
            for (index, record) in records.iter().enumerate() {
                println!("{}", format_record_line(index, record));
            }
        }
        RecordsSubcommand::Delete { index } => {
            let removed = store.delete_by_index(*index)?;
            println!("Deleted record {index} ({})", removed.mod_info.name);
        }
        RecordsSubcommand::Update(update) => {
            let patch = update.patch();
            if patch.is_empty() {
                bail!("nothing to update, pass --name, --author, --category or --mod-version");
            }
            store.update_fields_by_match(&update.build_time, &patch)?;
            println!("Updated record {}", update.build_time);
        }
        RecordsSubcommand::Restore { index, output } => {
            let project = restore(&store.get(*index)?);
            match output {
                Some(path) => {
                    project.save(path)?;
                    println!("{}", path.display());
                }
                None => println!(
                    "{}",
                    serde_json::to_string_pretty(&project).context("failed to serialize project")?
                ),
            }
        }
        RecordsSubcommand::Sort { key, desc } => {
            let direction = if *desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            store.sort(*key, direction)?;
            println!("Sorted records by {key}");
        }
        RecordsSubcommand::Backup { dest } => {
            let dest = dest.clone().unwrap_or_else(|| config.build.output_dir());
            let path = store.backup(&dest)?;
            println!("{}", path.display());
        }
        RecordsSubcommand::Import { backup } => {
            let count = store.import(backup)?;
            println!("Imported {count} records");
        }
    }
    Ok(())
}

/// One line of `records list`.
#[must_use]
pub fn format_record_line(index: usize, record: &BuildRecord) -> String {
    let info = &record.mod_info;
    let mut line = format!(
        "{index:>3}  {}  {} {}  by {}",
        or_dash(&record.build_info.build_time),
        or_dash(&info.name),
        or_dash(&info.version),
        or_dash(&info.author),
    );
    if !info.category.is_empty() {
        line.push_str(&format!("  [{}]", info.category));
    }
    if !record.build_info.output_path.is_empty() {
        line.push_str(&format!("  -> {}", record.build_info.output_path));
    }
    line
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
