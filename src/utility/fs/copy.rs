// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use filetime::FileTime;
use std::fs;
use std::path::Path;

use super::walk::{WalkOptions, walk};
use crate::error::BuildError;

/// Copies one file and carries its access and modification times over.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns `BuildError::Io` naming `src` if the copy itself fails. Failing to
/// set timestamps is logged and ignored.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, BuildError> {
    let bytes = fs::copy(src, dst).map_err(|e| BuildError::io("copy", src, e))?;
    preserve_times(src, dst);
    Ok(bytes)
}

/// Recursively copies the directory `src` to `dst`, creating `dst`.
///
/// Symbolic links are followed. Empty subdirectories are recreated. Returns the number of files copied.
///
/// # Errors
///
/// Returns `BuildError::Io` naming the offending path on the first failure.
///
/// # Example
/// ```no_run
/// use fmm_mod_creator::utility::fs::copy::copy_dir_all;
/// use std::path::Path;
///
/// copy_dir_all(Path::new("/source/dir"), Path::new("/dest/dir"))?;
/// # Ok::<(), fmm_mod_creator::error::BuildError>(())
/// ```
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    fs::create_dir_all(dst).map_err(|e| BuildError::io("create directory", dst, e))?;

    // Symlinked payload is copied as its target.
    let options = WalkOptions::builder().with_follow_links(true).build();
    let tree = walk(src, &options).map_err(|e| BuildError::io("read", src, e))?;

    for dir in tree.directories() {
        let target = dst.join(relative(src, dir));
        fs::create_dir_all(&target).map_err(|e| BuildError::io("create directory", &target, e))?;
    }
    for file in tree.files() {
        copy_file(file, &dst.join(relative(src, file)))?;
    }

    // Directory times last, after their contents stopped changing.
    for dir in tree.directories().iter().rev() {
        preserve_times(dir, &dst.join(relative(src, dir)));
    }
    preserve_times(src, dst);

    Ok(tree.files().len())
}

fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn preserve_times(src: &Path, dst: &Path) {
    let result = fs::metadata(src).and_then(|meta| {
        filetime::set_file_times(
            dst,
            FileTime::from_last_access_time(&meta),
            FileTime::from_last_modification_time(&meta),
        )
    });
    if let Err(e) = result {
        tracing::debug!(path = %dst.display(), error = %e, "could not preserve timestamps");
    }
}
