// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `modinfo.ini` writer, one file per generated folder.
//!
//! ```text
//! name=<banner or "NN module">
//! version=v<sanitized mod version>
//! description=<block description>
//! category=<mod category>
//! screenshot=<cover.png | warning.jpg | screenshot.webp | "">
//! author=<mod author>
//! NameAsBundle=<mod name>
//! ```


use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::version::sanitize_version;
use crate::error::BuildError;
use crate::project::ModInfo;

/// File name of the per-folder descriptor.
pub const METADATA_FILE_NAME: &str = "modinfo.ini";

/// Per-folder values of a descriptor; the rest comes from [`ModInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderMetadata {
    /// Display name; decorative banner for cover, warning and separator folders.
    pub name: String,
    pub description: String,
    /// Image file name inside the folder, blank when there is none.
    pub screenshot: String,
}

impl FolderMetadata {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        screenshot: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            screenshot: screenshot.into(),
        }
    }
}

/// Renders the descriptor text. Keys appear in a fixed order.
#[must_use]
pub fn render(folder: &FolderMetadata, info: &ModInfo) -> String {
    let version = format!("v{}", sanitize_version(&info.version));
    let mut out = String::new();
    for (key, value) in [
        ("name", folder.name.as_str()),
        ("version", version.as_str()),
        ("description", folder.description.as_str()),
        ("category", info.category.as_str()),
        ("screenshot", folder.screenshot.as_str()),
        ("author", info.author.as_str()),
        ("NameAsBundle", info.name.as_str()),
    ] {
        let _ = writeln!(out, "{key}={value}");
    }
    out
}

/// Writes `modinfo.ini` into `dir` and returns its path.
///
/// # Errors
///
/// Returns `BuildError::Io` if the file cannot be written.
pub fn write_metadata(
    dir: &Path,
    folder: &FolderMetadata,
    info: &ModInfo,
) -> Result<PathBuf, BuildError> {
    let path = dir.join(METADATA_FILE_NAME);
    std::fs::write(&path, render(folder, info)).map_err(|e| BuildError::io("write", &path, e))?;
    tracing::trace!(path = %path.display(), name = %folder.name, "metadata written");
    Ok(path)
}
