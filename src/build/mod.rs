// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod package build.
//!
//! ```text
//! service      single-flight, background worker, records successes
//!    |
//! pipeline     Idle -> TempDir -> Cover -> Blocks -> Archive -> Relocate
//!    |
//!    +-- validate   pre-flight checks
//!    +-- layout     numbered folders, images, payload copies
//!    |     +-- metadata   modinfo.ini
//!    |     +-- version    v-prefixed sanitized version
//!    +-- archive    zip / rar (zip container) / 7z
//! ```

pub mod archive;
pub mod layout;
pub mod metadata;
pub mod pipeline;
pub mod service;
pub mod validate;
pub mod version;
