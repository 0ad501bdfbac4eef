// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build state machine.
//!
//! ```text
//! Idle
//!  -> CreatingTempDir  10%  <cache>/<mod>-<YYYYmmdd_HHMM>/
//!  -> WritingCover     20%  00-cover/
//!  -> WritingBlocks    40%  01-.. NN-..
//!  -> Archiving        70%  <cache>/<temp dir name>.<ext>
//!  -> Relocating       90%  <output>/<mod>.<ext> (replaces existing)
//!  -> Completed       100%
//!
//! any stage --error--> Failed   (temp dir and partial archive kept)
//! ```
//!
//! Each stage emits `Status` then `Progress` before doing its work, so the
//! percentages are monotonic within one build.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Local};
use flume::Sender;
use std::fmt;
use std::path::{Path, PathBuf};

use super::archive::{create_archive, replace_file};
use super::layout::{write_blocks, write_cover};
use super::validate::validate;
use crate::config::types::{ArchiveFormat, BuildSettings};
use crate::error::{BuildError, ValidationError};
use crate::project::ModProject;

/// Pipeline states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Idle,
    CreatingTempDir,
    WritingCover,
    WritingBlocks,
    Archiving,
    Relocating,
    Completed,
    Failed,
}

impl BuildStage {
    /// Stages a successful build passes through, in order.
    pub const SEQUENCE: [Self; 6] = [
        Self::CreatingTempDir,
        Self::WritingCover,
        Self::WritingBlocks,
        Self::Archiving,
        Self::Relocating,
        Self::Completed,
    ];

    /// Fixed progress percentage reported on entering the stage.
    #[must_use]
    pub const fn checkpoint(self) -> Option<u8> {
        match self {
            Self::CreatingTempDir => Some(10),
            Self::WritingCover => Some(20),
            Self::WritingBlocks => Some(40),
            Self::Archiving => Some(70),
            Self::Relocating => Some(90),
            Self::Completed => Some(100),
            Self::Idle | Self::Failed => None,
        }
    }

    /// Short status token shown to the user.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CreatingTempDir => "creating_temp_dir",
            Self::WritingCover => "creating_cover_folder",
            Self::WritingBlocks => "creating_block_folders",
            Self::Archiving => "creating_archive_file",
            Self::Relocating => "moving_to_output",
            Self::Completed => "build_completed",
            Self::Failed => "build_failed",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One-way notification from the build worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Progress(u8),
    Status(BuildStage),
    /// Final artifact path.
    Completed(PathBuf),
    /// Human-readable failure message.
    Failed(String),
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Artifact in the output directory.
    pub output_path: PathBuf,
    /// Populated working tree, kept after the build.
    pub temp_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub format: ArchiveFormat,
    pub started_at: DateTime<Local>,
}

/// Runs every stage in order on the calling thread.
///
/// Stage events go to `events`; a dropped receiver is ignored. Terminal
/// `Completed`/`Failed` events are left to the caller.
///
/// # Errors
///
/// Returns `BuildError::Invalid` if the project fails pre-flight checks and
/// `BuildError::Io`/`BuildError::Archive` for mid-pipeline failures. Nothing
/// written before the failure is removed.
pub fn run(
    project: &ModProject,
    settings: &BuildSettings,
    events: &Sender<BuildEvent>,
) -> Result<BuildOutcome, BuildError> {
    validate(project)?;
    let cover = project.cover.as_ref().ok_or(ValidationError::MissingCover)?;
    let info = &project.mod_info;
    let started_at = Local::now();
    let format = settings.archive_format;

    enter(events, BuildStage::CreatingTempDir);
    let cache_dir = settings.cache_dir();
    let temp_dir = cache_dir.join(temp_dir_name(&info.name, &started_at));
    // Same mod built twice within a minute lands on the same name.
    if temp_dir.exists() {
        tracing::debug!(temp_dir = %temp_dir.display(), "removing stale working directory");
        std::fs::remove_dir_all(&temp_dir)
            .map_err(|e| BuildError::io("remove directory", &temp_dir, e))?;
    }
    std::fs::create_dir_all(&temp_dir)
        .map_err(|e| BuildError::io("create directory", &temp_dir, e))?;
    tracing::info!(temp_dir = %temp_dir.display(), "working directory created");

    enter(events, BuildStage::WritingCover);
    write_cover(&temp_dir, cover, info)?;

    enter(events, BuildStage::WritingBlocks);
    let folders = write_blocks(&temp_dir, &project.blocks, info)?;
    tracing::debug!(count = folders.len(), "content folders written");

    enter(events, BuildStage::Archiving);
    let archive = create_archive(&temp_dir, &cache_dir, format)?;

    enter(events, BuildStage::Relocating);
    let output_path = relocate(&archive, &settings.output_dir(), &info.name, format)?;

    enter(events, BuildStage::Completed);
    tracing::info!(output = %output_path.display(), %format, "build completed");

    Ok(BuildOutcome {
        output_path,
        temp_dir,
        cache_dir,
        format,
        started_at,
    })
}

/// `<mod name>-<YYYYmmdd_HHMM>`.
#[must_use]
pub fn temp_dir_name(mod_name: &str, at: &DateTime<Local>) -> String {
    let name = mod_name.trim().replace(['/', '\\'], "_");
    format!("{name}-{}", at.format("%Y%m%d_%H%M"))
}

/// Moves the artifact to `<output_dir>/<mod name>.<ext>`.
fn relocate(
    archive: &Path,
    output_dir: &Path,
    mod_name: &str,
    format: ArchiveFormat,
) -> Result<PathBuf, BuildError> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| BuildError::io("create directory", output_dir, e))?;
    let name = mod_name.trim().replace(['/', '\\'], "_");
    let target = output_dir.join(format!("{name}.{}", format.extension()));
    replace_file(archive, &target)?;
    Ok(target)
}

fn enter(events: &Sender<BuildEvent>, stage: BuildStage) {
    tracing::debug!(stage = %stage, "entering stage");
    let _ = events.send(BuildEvent::Status(stage));
    if let Some(percent) = stage.checkpoint() {
        let _ = events.send(BuildEvent::Progress(percent));
    }
}
