// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// Options for directory traversal.
///
/// Defaults visit everything: hidden files included, ignore files not
/// honoured. Mod payloads are copied and archived verbatim.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Respect .gitignore/.ignore files
    #[builder(setters(name = with_respect_ignore_files), default = false)]
    respect_ignore_files: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_ignore_files(&self) -> bool {
        self.respect_ignore_files
    }
}

/// Files and directories below a root, in sorted traversal order.
#[derive(Debug, Default)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl WalkResult {
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Directories below the root; the root itself is not included.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.max_depth(options.max_depth());
    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    let respect = options.respect_ignore_files();
    builder.ignore(respect);
    builder.parents(respect);
    builder.git_ignore(respect);
    builder.git_global(respect);
    builder.git_exclude(respect);

    // Stable entry order keeps archives reproducible.
    builder.sort_by_file_name(|a, b| a.cmp(b));

    builder
}

/// Walks `root` and collects every file and directory beneath it.
///
/// # Errors
///
/// Returns the first traversal error, e.g. a missing root or an unreadable
/// directory.
///
/// # Example
/// ```no_run
/// use fmm_mod_creator::utility::fs::walk::{walk, WalkOptions};
///
/// let result = walk("/path/to/mod", &WalkOptions::default())?;
/// println!("Found {} files", result.files().len());
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> io::Result<WalkResult> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("root directory does not exist: {}", root.display()),
        ));
    }

    let mut result = WalkResult::default();
    for entry in build_walker(root, options).build() {
        let entry = entry.map_err(into_io_error)?;
        if entry.depth() == 0 {
            continue;
        }
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            result.directories.push(entry.into_path());
        } else if file_type.is_file() {
            result.files.push(entry.into_path());
        } else if file_type.is_symlink() {
            tracing::warn!(path = %entry.path().display(), "symbolic link not followed, skipping");
        }
    }

    tracing::trace!(
        root = %root.display(),
        files = result.files.len(),
        directories = result.directories.len(),
        "walk complete"
    );
    Ok(result)
}

fn into_io_error(err: ignore::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
