// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Editor state: the ordered block list a build is made from.
//!
//! ```text
//! ModProject
//!   mod_info   ModInfo {name, version, author, category}
//!   cover      Option<CoverBlock>         -> 00-cover
//!   blocks     Vec<ContentBlock>          -> 01.., 02.., ...
//!                Warning   {image_path?, description, block_tag}
//!                Separator {separator_name}
//!                ModFile   {module_name, area_mark, image_path?,
//!                           description, files[], folder_path?}
//! ```
//!
//! A project file is this structure serialized as JSON; `records restore`
//! writes the same shape.


use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Mod-wide information, snapshotted at build start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModInfo {
    pub name: String,
    /// Free-form; sanitized before it reaches `modinfo.ini`.
    pub version: String,
    pub author: String,
    /// Optional, may be blank.
    pub category: String,
}

impl ModInfo {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            category: String::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// The mandatory cover block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverBlock {
    pub image_path: Option<PathBuf>,
    pub description: String,
    pub cover_tag: String,
}

/// A warning banner with an optional image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningBlock {
    pub image_path: Option<PathBuf>,
    pub description: String,
    pub block_tag: String,
}

/// A named divider with no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorBlock {
    pub separator_name: String,
}

/// One payload file or folder of a module, copied under `display_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub source_path: PathBuf,
    pub display_name: String,
}

impl FileEntry {
    /// Entry named after the last component of `source_path`.
    #[must_use]
    pub fn from_path(source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let display_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            source_path,
            display_name,
        }
    }
}

/// A module of user payload files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModFileBlock {
    pub module_name: String,
    pub area_mark: String,
    pub image_path: Option<PathBuf>,
    pub description: String,
    pub files: Vec<FileEntry>,
    pub folder_path: Option<PathBuf>,
}

/// One entry of the ordered content list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Warning(WarningBlock),
    Separator(SeparatorBlock),
    ModFile(ModFileBlock),
}

impl ContentBlock {
    /// Type tag as written to build records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Warning(_) => "warning",
            Self::Separator(_) => "separator",
            Self::ModFile(_) => "mod_file",
        }
    }

    #[must_use]
    pub fn separator(name: impl Into<String>) -> Self {
        Self::Separator(SeparatorBlock {
            separator_name: name.into(),
        })
    }
}

/// Complete editor state for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModProject {
    pub mod_info: ModInfo,
    pub cover: Option<CoverBlock>,
    pub blocks: Vec<ContentBlock>,
}

impl ModProject {
    /// Reads a project from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid project.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid project file {}", path.display()))
    }

    /// Writes the project as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write project {}", path.display()))
    }
}
