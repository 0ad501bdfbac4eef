// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rebuilds editor state from a build record.
//!
//! Files and images are referenced by path. Paths that no longer exist are
//! dropped: the block itself is still restored, in its original position.
//! Blocks of an unknown type are skipped.


use std::path::PathBuf;

use super::{BlockRecord, BuildRecord, CoverRecord};
use crate::project::{
    ContentBlock, CoverBlock, FileEntry, ModFileBlock, ModProject, SeparatorBlock, WarningBlock,
};

/// Inverse of [`BuildRecord::from_project`] for everything still on disk.
#[must_use]
pub fn restore(record: &BuildRecord) -> ModProject {
    let blocks = record
        .content_blocks
        .iter()
        .filter_map(|block| {
            let restored = restore_block(block);
            if restored.is_none() {
                tracing::warn!("skipping block of unknown type");
            }
            restored
        })
        .collect();

    ModProject {
        mod_info: record.mod_info.clone(),
        cover: restore_cover(&record.cover_block),
        blocks,
    }
}

fn restore_cover(cover: &CoverRecord) -> Option<CoverBlock> {
    if cover.is_empty() {
        return None;
    }
    Some(CoverBlock {
        image_path: existing_path(&cover.image_path),
        description: cover.description.clone(),
        cover_tag: cover.cover_tag.clone(),
    })
}

fn restore_block(block: &BlockRecord) -> Option<ContentBlock> {
    let restored = match block {
        BlockRecord::Warning {
            block_tag,
            image_path,
            description,
        } => ContentBlock::Warning(WarningBlock {
            image_path: existing_path(image_path),
            description: description.clone(),
            block_tag: block_tag.clone(),
        }),
        BlockRecord::Separator { separator_name } => ContentBlock::Separator(SeparatorBlock {
            separator_name: separator_name.clone(),
        }),
        BlockRecord::ModFile {
            area_mark,
            module_name,
            image_path,
            description,
            files,
            folder_path,
        } => ContentBlock::ModFile(ModFileBlock {
            module_name: module_name.clone(),
            area_mark: area_mark.clone(),
            image_path: existing_path(image_path),
            description: description.clone(),
            files: files
                .iter()
                .filter_map(|f| {
                    let source_path = existing_path(&f.file_path)?;
                    let display_name = if f.file_name.is_empty() {
                        FileEntry::from_path(source_path.clone()).display_name
                    } else {
                        f.file_name.clone()
                    };
                    Some(FileEntry {
                        source_path,
                        display_name,
                    })
                })
                .collect(),
            folder_path: (!folder_path.is_empty()).then(|| PathBuf::from(folder_path)),
        }),
        BlockRecord::Unknown => return None,
    };
    Some(restored)
}

/// `Some(path)` when `raw` is set and still exists.
fn existing_path(raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }
    let path = PathBuf::from(raw);
    if path.exists() {
        Some(path)
    } else {
        tracing::warn!(path = raw, "referenced path no longer exists, dropping it");
        None
    }
}
