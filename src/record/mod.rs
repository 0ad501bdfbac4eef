// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted build history.
//!
//! ```text
//! FMMxMOD-Creator_build-record.json   (JSON array, 2-space indent)
//! [
//!   {
//!     "build_info":     {build_time, output_path, temp_dir, cache_dir},
//!     "mod_info":       {name, version, author, category},
//!     "cover_block":    {image_path, description, cover_tag, type: "cover"},
//!     "content_blocks": [{type: warning|separator|mod_file, ...}],
//!     "block_order":    ["cover", "separator_Core", "mod_file_Main", ...]
//!   }
//! ]
//! ```
//!
//! Field names and nesting are the backup/import interchange format.
//! Absent paths are written as empty strings.

pub mod restore;
pub mod store;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::build::pipeline::BuildOutcome;
use crate::project::{ContentBlock, CoverBlock, ModInfo, ModProject};

/// Where and when a build ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    /// ISO-8601 local time, microsecond precision. Identifies the record
    /// for field updates.
    pub build_time: String,
    pub output_path: String,
    pub temp_dir: String,
    pub cache_dir: String,
}

/// Processed cover block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverRecord {
    pub image_path: String,
    pub description: String,
    pub cover_tag: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CoverRecord {
    /// True for `{}` and records carrying no cover data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_path.is_empty()
            && self.description.is_empty()
            && self.cover_tag.is_empty()
            && self.kind.is_empty()
    }
}

impl From<&CoverBlock> for CoverRecord {
    fn from(cover: &CoverBlock) -> Self {
        Self {
            image_path: path_string(cover.image_path.as_deref()),
            description: cover.description.clone(),
            cover_tag: cover.cover_tag.clone(),
            kind: "cover".to_string(),
        }
    }
}

/// One file of a module block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecord {
    pub file_path: String,
    pub file_name: String,
}

/// Processed content block, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockRecord {
    Warning {
        #[serde(default)]
        block_tag: String,
        #[serde(default)]
        image_path: String,
        #[serde(default)]
        description: String,
    },
    Separator {
        #[serde(default)]
        separator_name: String,
    },
    ModFile {
        #[serde(default)]
        area_mark: String,
        #[serde(default)]
        module_name: String,
        #[serde(default)]
        image_path: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        files: Vec<FileRecord>,
        #[serde(default)]
        folder_path: String,
    },
    /// Block type this version does not know; skipped on restore.
    #[serde(other)]
    Unknown,
}

impl From<&ContentBlock> for BlockRecord {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Warning(w) => Self::Warning {
                block_tag: w.block_tag.clone(),
                image_path: path_string(w.image_path.as_deref()),
                description: w.description.clone(),
            },
            ContentBlock::Separator(s) => Self::Separator {
                separator_name: s.separator_name.clone(),
            },
            ContentBlock::ModFile(m) => Self::ModFile {
                area_mark: m.area_mark.clone(),
                module_name: m.module_name.clone(),
                image_path: path_string(m.image_path.as_deref()),
                description: m.description.clone(),
                files: m
                    .files
                    .iter()
                    .map(|f| FileRecord {
                        file_path: f.source_path.display().to_string(),
                        file_name: f.display_name.clone(),
                    })
                    .collect(),
                folder_path: path_string(m.folder_path.as_deref()),
            },
        }
    }
}

/// Snapshot of one completed build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildRecord {
    pub build_info: BuildInfo,
    pub mod_info: ModInfo,
    pub cover_block: CoverRecord,
    pub content_blocks: Vec<BlockRecord>,
    pub block_order: Vec<String>,
}

impl BuildRecord {
    /// Record for a project that built successfully.
    #[must_use]
    pub fn from_build(project: &ModProject, outcome: &BuildOutcome) -> Self {
        Self {
            build_info: BuildInfo {
                build_time: outcome
                    .started_at
                    .naive_local()
                    .format("%Y-%m-%dT%H:%M:%S%.6f")
                    .to_string(),
                output_path: outcome.output_path.display().to_string(),
                temp_dir: outcome.temp_dir.display().to_string(),
                cache_dir: outcome.cache_dir.display().to_string(),
            },
            ..Self::from_project(project)
        }
    }

    /// Record body without build information.
    #[must_use]
    pub fn from_project(project: &ModProject) -> Self {
        Self {
            build_info: BuildInfo::default(),
            mod_info: project.mod_info.clone(),
            cover_block: project
                .cover
                .as_ref()
                .map(CoverRecord::from)
                .unwrap_or_default(),
            content_blocks: project.blocks.iter().map(BlockRecord::from).collect(),
            block_order: block_order(project.cover.as_ref(), &project.blocks),
        }
    }
}

/// Human-readable identifiers for the cover and each content block.
///
/// Tag or name when set, otherwise `<type>_<1-based position>`.
#[must_use]
pub fn block_order(cover: Option<&CoverBlock>, blocks: &[ContentBlock]) -> Vec<String> {
    let cover_id = cover.map(|c| {
        if c.cover_tag.is_empty() {
            "cover".to_string()
        } else {
            format!("cover_{}", c.cover_tag)
        }
    });

    let block_ids = blocks.iter().enumerate().map(|(i, block)| {
        let label = match block {
            ContentBlock::Separator(s) => s.separator_name.as_str(),
            ContentBlock::Warning(w) => w.block_tag.as_str(),
            ContentBlock::ModFile(m) if !m.area_mark.is_empty() => m.area_mark.as_str(),
            ContentBlock::ModFile(m) => m.module_name.as_str(),
        };
        if label.is_empty() {
            format!("{}_{}", block.kind(), i + 1)
        } else {
            format!("{}_{label}", block.kind())
        }
    });

    cover_id.into_iter().chain(block_ids).collect()
}

fn path_string(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
