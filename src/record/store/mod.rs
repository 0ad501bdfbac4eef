// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-record store: one JSON array file, rewritten whole on every change.
//!
//! ```text
//! append        read (lenient) -> push -> write
//! list_all      read (lenient), absent/corrupt => []
//! update        read (strict) -> patch mod_info where build_time matches -> write
//! delete        read (strict) -> remove index -> write
//! sort          read (strict) -> stable sort by key -> write
//! backup        <dest>/FMMxMOD-Creator_build-record-<YYYYmmdd_HHMM>.zip
//! import        root entry of a backup zip -> replaces the file
//! ```
//!
//! Records are edited as raw JSON values, so fields this version does not
//! know survive every rewrite. Writes go through a temp file and rename.
//! Access is serialized within the process; other processes are not
//! coordinated with.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::BuildRecord;
use crate::error::RecordError;

/// File name of the record store inside the cache directory.
pub const RECORD_FILE_NAME: &str = "FMMxMOD-Creator_build-record.json";

const BACKUP_PREFIX: &str = "FMMxMOD-Creator_build-record";

/// Record field to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Author,
    Category,
    /// `build_info.build_time`; unparseable times sort first.
    Date,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "author" => Ok(Self::Author),
            "category" => Ok(Self::Category),
            "date" | "time" => Ok(Self::Date),
            other => Err(format!(
                "unknown sort key '{other}', expected name, author, category or date"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Author => "author",
            Self::Category => "category",
            Self::Date => "date",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// `mod_info` fields a user may edit on an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModInfoPatch {
    pub name: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub version: Option<String>,
}

impl ModInfoPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.author.is_none()
            && self.category.is_none()
            && self.version.is_none()
    }

    fn fields(&self) -> [(&'static str, Option<&String>); 4] {
        [
            ("name", self.name.as_ref()),
            ("author", self.author.as_ref()),
            ("category", self.category.as_ref()),
            ("version", self.version.as_ref()),
        ]
    }
}

/// Handle to the record file.
#[derive(Debug)]
pub struct BuildRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BuildRecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at the default file name inside `cache_dir`.
    #[must_use]
    pub fn in_dir(cache_dir: &Path) -> Self {
        Self::new(cache_dir.join(RECORD_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record and returns the new record count.
    ///
    /// A corrupt file is logged and replaced by a one-element array.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn append(&self, record: &BuildRecord) -> Result<usize, RecordError> {
        let _guard = self.guard();
        let mut records = self.read_lenient();
        records.push(serde_json::to_value(record)?);
        self.write(&records)?;
        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            build_time = %record.build_info.build_time,
            "build record appended"
        );
        Ok(records.len())
    }

    /// All records in file order; empty when the file is absent or corrupt.
    ///
    /// Elements that are not valid records come back as defaults so indices
    /// stay aligned with the file.
    #[must_use]
    pub fn list_all(&self) -> Vec<BuildRecord> {
        let _guard = self.guard();
        self.read_lenient()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).unwrap_or_else(|e| {
                    tracing::warn!(index, error = %e, "unreadable build record");
                    BuildRecord::default()
                })
            })
            .collect()
    }

    /// Record at `index` in file order.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, or an error if the file is
    /// unreadable.
    pub fn get(&self, index: usize) -> Result<BuildRecord, RecordError> {
        let _guard = self.guard();
        let records = self.read_strict()?;
        let value = records
            .get(index)
            .cloned()
            .ok_or(RecordError::IndexOutOfRange {
                index,
                len: records.len(),
            })?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patches `mod_info` of the first record whose `build_info.build_time`
    /// equals `build_time`. Only name, author, category and version change.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when no record matches, or an error if the
    /// file cannot be read or written.
    pub fn update_fields_by_match(
        &self,
        build_time: &str,
        patch: &ModInfoPatch,
    ) -> Result<(), RecordError> {
        let _guard = self.guard();
        let mut records = self.read_strict()?;

        let record = records
            .iter_mut()
            .find(|r| {
                r.pointer("/build_info/build_time").and_then(Value::as_str) == Some(build_time)
            })
            .ok_or_else(|| RecordError::RecordNotFound(build_time.to_string()))?;

        if !record.get("mod_info").is_some_and(Value::is_object) {
            record["mod_info"] = Value::Object(serde_json::Map::new());
        }
        for (key, value) in patch.fields() {
            if let Some(value) = value {
                record["mod_info"][key] = Value::String(value.clone());
            }
        }

        self.write(&records)?;
        tracing::info!(build_time, "build record updated");
        Ok(())
    }

    /// Removes and returns the record at `index`; later records shift down.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, or an error if the file
    /// cannot be read or written.
    pub fn delete_by_index(&self, index: usize) -> Result<BuildRecord, RecordError> {
        let _guard = self.guard();
        let mut records = self.read_strict()?;
        if index >= records.len() {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }
        let removed = records.remove(index);
        self.write(&records)?;
        tracing::info!(index, remaining = records.len(), "build record deleted");
        Ok(serde_json::from_value(removed).unwrap_or_default())
    }

    /// Rewrites the file sorted by `key`. Equal keys keep their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn sort(&self, key: SortKey, direction: SortDirection) -> Result<(), RecordError> {
        let _guard = self.guard();
        let mut keyed: Vec<(SortValue, Value)> = self
            .read_strict()?
            .into_iter()
            .map(|record| (sort_value(&record, key), record))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        });
        let records: Vec<Value> = keyed.into_iter().map(|(_, record)| record).collect();

        self.write(&records)?;
        tracing::debug!(%key, ?direction, "build records sorted");
        Ok(())
    }

    /// Zips the record file into `dest_dir` and returns the backup path.
    ///
    /// # Errors
    ///
    /// Returns `NoRecordFile` when there is nothing to back up, or an error if
    /// the archive cannot be written.
    pub fn backup(&self, dest_dir: &Path) -> Result<PathBuf, RecordError> {
        let _guard = self.guard();
        if !self.path.is_file() {
            return Err(RecordError::NoRecordFile(self.path.clone()));
        }
        let content = std::fs::read(&self.path).map_err(|e| RecordError::io(&self.path, e))?;

        std::fs::create_dir_all(dest_dir).map_err(|e| RecordError::io(dest_dir, e))?;
        let stamp = Local::now().format("%Y%m%d_%H%M");
        let backup = dest_dir.join(format!("{BACKUP_PREFIX}-{stamp}.zip"));

        let file = File::create(&backup).map_err(|e| RecordError::io(&backup, e))?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(RECORD_FILE_NAME, options)?;
        zip.write_all(&content).map_err(|e| RecordError::io(&backup, e))?;
        zip.finish()?;

        tracing::info!(backup = %backup.display(), "build records backed up");
        Ok(backup)
    }

    /// Replaces the record file with the one inside a backup zip and returns
    /// the number of imported records.
    ///
    /// # Errors
    ///
    /// Returns `MissingBackupEntry` if the zip has no record file at its root,
    /// `Corrupt` if that entry is not JSON, or an I/O/zip error.
    pub fn import(&self, backup: &Path) -> Result<usize, RecordError> {
        let _guard = self.guard();
        let file = File::open(backup).map_err(|e| RecordError::io(backup, e))?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut content = String::new();
        match archive.by_name(RECORD_FILE_NAME) {
            Ok(mut entry) => {
                entry
                    .read_to_string(&mut content)
                    .map_err(|e| RecordError::io(backup, e))?;
            }
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(RecordError::MissingBackupEntry(RECORD_FILE_NAME.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let records = parse_records(&content).map_err(|e| RecordError::Corrupt {
            path: backup.to_path_buf(),
            message: e.to_string(),
        })?;
        self.write(&records)?;
        tracing::info!(backup = %backup.display(), count = records.len(), "build records imported");
        Ok(records.len())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_strict(&self) -> Result<Vec<Value>, RecordError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RecordError::io(&self.path, e)),
        };
        parse_records(&content).map_err(|e| RecordError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn read_lenient(&self) -> Vec<Value> {
        self.read_strict().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "build record store unreadable, treating as empty");
            Vec::new()
        })
    }

    fn write(&self, records: &[Value]) -> Result<(), RecordError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(|e| RecordError::io(dir, e))?;

        let json = serde_json::to_string_pretty(records)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| RecordError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| RecordError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| RecordError::io(&self.path, e.error))?;
        Ok(())
    }
}

/// Parses the file body; a single object counts as a one-element array.
fn parse_records(content: &str) -> Result<Vec<Value>, serde_json::Error> {
    Ok(match serde_json::from_str::<Value>(content)? {
        Value::Array(records) => records,
        other => vec![other],
    })
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Time(NaiveDateTime),
}

fn sort_value(record: &Value, key: SortKey) -> SortValue {
    let field = match key {
        SortKey::Name => "/mod_info/name",
        SortKey::Author => "/mod_info/author",
        SortKey::Category => "/mod_info/category",
        SortKey::Date => {
            return SortValue::Time(
                record
                    .pointer("/build_info/build_time")
                    .and_then(Value::as_str)
                    .and_then(parse_build_time)
                    .unwrap_or(NaiveDateTime::MIN),
            );
        }
    };
    SortValue::Text(
        record
            .pointer(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase(),
    )
}

/// Accepts naive ISO-8601 local times and RFC 3339 times with an offset.
pub(crate) fn parse_build_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
