// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Maps the ordered block list to a numbered folder tree and fills it.
//!
//! ```text
//! <temp>/
//!   00-cover/               cover<ext>       modinfo.ini
//!   01-warning/             warning<ext>     modinfo.ini
//!   02-separator-<name>/                     modinfo.ini
//!   03-<module_name>/       screenshot<ext>  modinfo.ini  <payload...>
//! ```
//!
//! Numbering is positional: every content block consumes one index, starting
//! at 1, whatever its type. Nothing is rolled back on failure.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::{FolderMetadata, write_metadata};
use crate::error::BuildError;
use crate::project::{ContentBlock, CoverBlock, FileEntry, ModInfo};
use crate::utility::fs::copy::{copy_dir_all, copy_file};

/// Folder holding the cover block.
pub const COVER_FOLDER: &str = "00-cover";

const COVER_BANNER: &str = "00 --------------Cover--------------";
const SEPARATOR_DESCRIPTION: &str = "This is a separator.";

/// Name and banner of one generated folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPlan {
    pub dir_name: String,
    /// Value of the `name` key in `modinfo.ini`.
    pub banner: String,
}

/// Plan for the cover folder.
#[must_use]
pub fn cover_plan() -> FolderPlan {
    FolderPlan {
        dir_name: COVER_FOLDER.to_string(),
        banner: COVER_BANNER.to_string(),
    }
}

/// Plan for the content block at 1-based `index`.
#[must_use]
pub fn content_plan(index: usize, block: &ContentBlock) -> FolderPlan {
    match block {
        ContentBlock::Warning(_) => FolderPlan {
            dir_name: format!("{index:02}-warning"),
            banner: format!("{index:02} --------------Warning--------------"),
        },
        ContentBlock::Separator(separator) => {
            let name = display_name(&separator.separator_name, "separator");
            FolderPlan {
                dir_name: format!("{index:02}-separator-{name}"),
                banner: format!("{index:02} ----------------Separator {name}----------------"),
            }
        }
        ContentBlock::ModFile(module) => {
            let name = display_name(&module.module_name, "module");
            FolderPlan {
                dir_name: format!("{index:02}-{name}"),
                banner: format!("{index:02} {name}"),
            }
        }
    }
}

/// Folder names for a whole block list, cover first.
#[must_use]
pub fn plan_folders(blocks: &[ContentBlock]) -> Vec<String> {
    std::iter::once(cover_plan().dir_name)
        .chain(
            blocks
                .iter()
                .enumerate()
                .map(|(i, block)| content_plan(i + 1, block).dir_name),
        )
        .collect()
}

/// Creates `00-cover` under `root` with its image and metadata.
///
/// # Errors
///
/// Returns `BuildError::Io` naming the offending path.
pub fn write_cover(root: &Path, cover: &CoverBlock, info: &ModInfo) -> Result<PathBuf, BuildError> {
    let plan = cover_plan();
    let dir = create_folder(root, &plan)?;
    let screenshot = copy_image(cover.image_path.as_deref(), &dir, "cover")?;
    write_metadata(
        &dir,
        &FolderMetadata::new(plan.banner, cover.description.clone(), screenshot),
        info,
    )?;
    Ok(dir)
}

/// Creates one folder per content block, in order.
///
/// # Errors
///
/// Returns `BuildError::Io` naming the offending path. Folders created
/// before the failure are left in place.
pub fn write_blocks(
    root: &Path,
    blocks: &[ContentBlock],
    info: &ModInfo,
) -> Result<Vec<PathBuf>, BuildError> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| write_block(root, i + 1, block, info))
        .collect()
}

fn write_block(
    root: &Path,
    index: usize,
    block: &ContentBlock,
    info: &ModInfo,
) -> Result<PathBuf, BuildError> {
    let plan = content_plan(index, block);
    let dir = create_folder(root, &plan)?;

    let metadata = match block {
        ContentBlock::Warning(warning) => {
            let screenshot = copy_image(warning.image_path.as_deref(), &dir, "warning")?;
            FolderMetadata::new(plan.banner, warning.description.clone(), screenshot)
        }
        ContentBlock::Separator(_) => FolderMetadata::new(plan.banner, SEPARATOR_DESCRIPTION, ""),
        ContentBlock::ModFile(module) => {
            let screenshot = copy_image(module.image_path.as_deref(), &dir, "screenshot")?;
            for entry in &module.files {
                copy_payload(entry, &dir)?;
            }
            FolderMetadata::new(plan.banner, module.description.clone(), screenshot)
        }
    };

    write_metadata(&dir, &metadata, info)?;
    tracing::debug!(folder = %plan.dir_name, kind = block.kind(), "block folder written");
    Ok(dir)
}

fn create_folder(root: &Path, plan: &FolderPlan) -> Result<PathBuf, BuildError> {
    let dir = root.join(&plan.dir_name);
    fs::create_dir_all(&dir).map_err(|e| BuildError::io("create directory", &dir, e))?;
    Ok(dir)
}

/// Copies an optional image as `<stem><ext>` and returns the new file name,
/// or an empty string when there is nothing to copy.
fn copy_image(image: Option<&Path>, dir: &Path, stem: &str) -> Result<String, BuildError> {
    let Some(image) = image.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(String::new());
    };
    if !image.is_file() {
        tracing::warn!(path = %image.display(), "image not found, skipping");
        return Ok(String::new());
    }

    let file_name = match image.extension() {
        Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
        None => stem.to_string(),
    };
    copy_file(image, &dir.join(&file_name))?;
    Ok(file_name)
}

fn copy_payload(entry: &FileEntry, dir: &Path) -> Result<(), BuildError> {
    let source = &entry.source_path;
    let Some(name) = payload_name(entry) else {
        tracing::warn!(path = %source.display(), "payload has no usable name, skipping");
        return Ok(());
    };
    let target = dir.join(name);

    if source.is_file() {
        copy_file(source, &target)?;
    } else if source.is_dir() {
        copy_dir_all(source, &target)?;
    } else {
        tracing::warn!(path = %source.display(), "payload source not found, skipping");
    }
    Ok(())
}

/// Display name when it is a plain file name, else the source file name.
fn payload_name(entry: &FileEntry) -> Option<String> {
    let display = safe_component(entry.display_name.trim());
    if !matches!(display.as_str(), "" | "." | "..") {
        return Some(display);
    }
    entry
        .source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// Trimmed name, `fallback` when blank, with path separators replaced.
fn display_name(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        safe_component(trimmed)
    }
}

fn safe_component(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
