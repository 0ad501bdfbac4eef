// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  walk(), WalkOptions
//!   copy:  copy_file(), copy_dir_all()
//! ```

pub mod fs;
