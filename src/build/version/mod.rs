// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version string normalization for `modinfo.ini`.
//!
//! ```text
//! "  v1.2 .3-beta!"  -> strip leading non-digits -> "1.2 .3-beta!"
//!                    -> drop whitespace          -> "1.2.3-beta!"
//!                    -> keep [0-9A-Za-z._-]      -> "1.2.3-beta"
//! ""                 -> APP_VERSION
//! ```


/// Version of this application, used when a mod version sanitizes to nothing.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normalizes a free-form version into a token safe for archives and
/// metadata files.
///
/// Total and idempotent: `sanitize_version(&sanitize_version(x)) ==
/// sanitize_version(x)` for every input.
#[must_use]
pub fn sanitize_version(raw: &str) -> String {
    let sanitized: String = raw
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    if sanitized.is_empty() {
        APP_VERSION.to_string()
    } else {
        sanitized
    }
}
