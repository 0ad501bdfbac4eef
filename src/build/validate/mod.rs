// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pre-flight checks. Nothing is written to disk before these pass.
//!
//! ```text
//! name -> version -> author -> cover present -> cover image exists
//!      -> every mod_file source exists -> at least one content block
//! ```
//!
//! The first failing check wins; errors are not aggregated.


use crate::error::{Field, ValidationError};
use crate::project::{ContentBlock, ModProject};

/// Checks a project before a build may start.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, in check order.
pub fn validate(project: &ModProject) -> Result<(), ValidationError> {
    let info = &project.mod_info;
    for (field, value) in [
        (Field::Name, &info.name),
        (Field::Version, &info.version),
        (Field::Author, &info.author),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let cover = project.cover.as_ref().ok_or(ValidationError::MissingCover)?;
    if let Some(image) = cover.image_path.as_ref().filter(|p| !p.as_os_str().is_empty())
        && !image.exists()
    {
        return Err(ValidationError::CoverImageNotFound(image.clone()));
    }

    for block in &project.blocks {
        if let ContentBlock::ModFile(module) = block
            && let Some(missing) = module.files.iter().find(|f| !f.source_path.exists())
        {
            return Err(ValidationError::FileNotFound(missing.display_name.clone()));
        }
    }

    if project.blocks.is_empty() {
        return Err(ValidationError::MissingContent);
    }

    Ok(())
}
