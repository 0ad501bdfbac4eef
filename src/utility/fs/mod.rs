// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for laying out and archiving mod folders.
//!
//! ```text
//! walk:  walk()          ignore::Walk, sorted, hidden files included
//!        WalkOptions     max_depth, follow_links, hidden, ignore files
//! copy:  copy_file()     fs::copy + filetime timestamps
//!        copy_dir_all()  recursive copy, empty dirs kept
//! ```

pub mod copy;
pub mod walk;
