// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compresses a populated folder tree into one artifact.
//!
//! ```text
//! zip  -> ZipWriter, Deflated                  <dir>.zip
//! 7z   -> SevenZWriter                         <dir>.7z
//! rar  -> zip written as <dir>.zip, renamed -> <dir>.rar  (zip bytes)
//! ```
//!
//! Entry names are paths relative to the source root with `/` separators.
//! There is no RAR encoder; a `.rar` artifact is a zip container.


use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::config::types::ArchiveFormat;
use crate::error::BuildError;
use crate::utility::fs::walk::{WalkOptions, walk};

/// Archives `source_dir` into `dest_dir/<source_dir name>.<ext>`.
///
/// Returns the artifact path.
///
/// # Errors
///
/// Returns `BuildError::Io` for filesystem failures and `BuildError::Archive`
/// when an encoder fails.
pub fn create_archive(
    source_dir: &Path,
    dest_dir: &Path,
    format: ArchiveFormat,
) -> Result<PathBuf, BuildError> {
    let base = source_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    let archive = dest_dir.join(format!("{base}.{}", format.extension()));

    match format {
        ArchiveFormat::Zip => write_zip(source_dir, &archive)?,
        ArchiveFormat::SevenZ => write_7z(source_dir, &archive)?,
        ArchiveFormat::Rar => {
            let zip_path = archive.with_extension(ArchiveFormat::Zip.extension());
            write_zip(source_dir, &zip_path)?;
            replace_file(&zip_path, &archive)?;
        }
    }

    tracing::debug!(archive = %archive.display(), %format, "archive written");
    Ok(archive)
}

/// Writes every file under `source_dir` into a deflated zip at `archive`.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the archive cannot be written.
pub fn write_zip(source_dir: &Path, archive: &Path) -> Result<(), BuildError> {
    let files = collect_files(source_dir)?;
    let file = File::create(archive).map_err(|e| BuildError::io("create", archive, e))?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let encoder_error = |e: zip::result::ZipError| BuildError::Archive {
        path: archive.to_path_buf(),
        message: e.to_string(),
    };

    for path in &files {
        zip.start_file(entry_name(source_dir, path), options)
            .map_err(encoder_error)?;
        let mut input = File::open(path).map_err(|e| BuildError::io("read", path, e))?;
        io::copy(&mut input, &mut zip).map_err(|e| BuildError::io("compress", path, e))?;
    }

    zip.finish().map_err(encoder_error)?;
    Ok(())
}

/// Writes every file under `source_dir` into a 7z archive at `archive`.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the archive cannot be written.
pub fn write_7z(source_dir: &Path, archive: &Path) -> Result<(), BuildError> {
    let files = collect_files(source_dir)?;
    let encoder_error = |e: sevenz_rust::Error| BuildError::Archive {
        path: archive.to_path_buf(),
        message: e.to_string(),
    };

    let mut writer = SevenZWriter::create(archive).map_err(encoder_error)?;
    for path in &files {
        let input = File::open(path).map_err(|e| BuildError::io("read", path, e))?;
        writer
            .push_archive_entry(
                SevenZArchiveEntry::from_path(path, entry_name(source_dir, path)),
                Some(input),
            )
            .map_err(encoder_error)?;
    }
    writer.finish().map_err(|e| BuildError::io("finish", archive, e))?;
    Ok(())
}

/// Moves `from` onto `to`, replacing an existing file.
pub(crate) fn replace_file(from: &Path, to: &Path) -> Result<(), BuildError> {
    if to.exists() {
        fs::remove_file(to).map_err(|e| BuildError::io("remove", to, e))?;
    }
    if fs::rename(from, to).is_err() {
        // Rename fails across filesystems.
        fs::copy(from, to).map_err(|e| BuildError::io("copy", from, e))?;
        fs::remove_file(from).map_err(|e| BuildError::io("remove", from, e))?;
    }
    Ok(())
}

fn collect_files(source_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let tree = walk(source_dir, &WalkOptions::default())
        .map_err(|e| BuildError::io("read", source_dir, e))?;
    Ok(tree.files().to_vec())
}

/// Relative entry name with `/` separators on every platform.
fn entry_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
