// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             CreatorError (~24 bytes)
//!                     |
//!   +---------+-------+-------+---------+------+
//!   |         |       |       |         |      |
//!   v         v       v       v         v      v
//! Validation Build  Record  Config     Io    Other
//!   Box      Box     Box     Box       Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Validation  MissingField, MissingCover, CoverImageNotFound,
//!               FileNotFound, MissingContent           (pre-flight)
//!   Build       Io (IOFailure), Archive, Invalid, AlreadyRunning (mid-pipeline)
//!   Record      Corrupt, Io, Json, IndexOutOfRange, Zip (history store)
//!   Config      ParseError, InvalidValue, Store
//!
//! All variants boxed => CreatorError fits in 24 bytes.
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CreatorError`].
pub type CreatorResult<T> = std::result::Result<T, CreatorError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum CreatorError {
    /// Pre-flight validation rejected the project.
    #[error("validation error: {0}")]
    Validation(#[from] Box<ValidationError>),

    /// The build pipeline failed.
    #[error("build error: {0}")]
    Build(#[from] Box<BuildError>),

    /// The build-record store failed.
    #[error("record error: {0}")]
    Record(#[from] Box<RecordError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CreatorError {
                fn from(err: $error) -> Self {
                    CreatorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ValidationError => Validation,
    BuildError => Build,
    RecordError => Record,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Validation Errors ---

/// Required text field of the mod information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
    Author,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Version => write!(f, "version"),
            Self::Author => write!(f, "author"),
        }
    }
}

/// Pre-flight errors, raised before any filesystem write happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required mod information field is blank.
    #[error("mod {0} is required")]
    MissingField(Field),

    /// No cover block was supplied.
    #[error("a cover block is required")]
    MissingCover,

    /// The cover image path does not exist.
    #[error("cover image not found: {}", .0.display())]
    CoverImageNotFound(PathBuf),

    /// A module references a file or folder that does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The content block list is empty.
    #[error("at least one content block is required")]
    MissingContent,
}

// --- Build Errors ---

/// Errors raised while the pipeline is running.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Filesystem operation failed.
    #[error("failed to {operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive encoder failed.
    #[error("failed to write archive '{}': {message}", .path.display())]
    Archive { path: PathBuf, message: String },

    /// The project failed pre-flight checks.
    #[error("project rejected: {0}")]
    Invalid(#[from] ValidationError),

    /// Another build is still in flight.
    #[error("a build is already running")]
    AlreadyRunning,

    /// The worker stopped without reporting completion or failure.
    #[error("build worker exited without a result")]
    WorkerLost,
}

impl BuildError {
    /// Wraps an I/O error with the failing operation and path.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

// --- Record Errors ---

/// Build-record store errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record file exists but does not hold valid JSON records.
    #[error("record file '{}' is corrupt: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    /// Reading or writing the record file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing records failed.
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),

    /// Index-based operation out of range.
    #[error("record index {index} out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No record matches the given build time.
    #[error("no record with build time '{0}'")]
    RecordNotFound(String),

    /// Backup archive could not be read or written.
    #[error("backup archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Backup archive does not contain the record file at its root.
    #[error("backup archive does not contain '{0}'")]
    MissingBackupEntry(String),

    /// No record file exists to back up.
    #[error("no record file at '{}'", .0.display())]
    NoRecordFile(PathBuf),
}

impl RecordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Unknown settings key.
    #[error("unknown setting '{0}'")]
    UnknownKey(String),

    /// Settings could not be persisted.
    #[error("failed to save settings to '{}': {message}", .path.display())]
    Store { path: PathBuf, message: String },
}
