//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the Tree-View Engine
//!
//! This module defines the error enum (`AppError`) used across the crate.
//! Each variant carries enough context for diagnostics, and all fallible
//! public operations return `Result<T, AppError>` for consistency.
//!
//! Note that directory-listing failures are deliberately *not* routed through
//! this type: the data-source boundary swallows them and yields an empty
//! listing (see `fs::dir_lister`).

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all tree-view engine operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error retrieving file or directory metadata.
    #[error("Filesystem metadata error on {path:?}: {source}")]
    FsMetadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested file or directory does not exist.
    #[error("File or directory not found: {0:?}")]
    NotFound(PathBuf),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSer(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Attach extra context to an error.
    pub fn with_context<S: Into<String>>(self, ctx: S) -> AppError {
        AppError::Other(format!("{}: {}", ctx.into(), self))
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Other(e.to_string())
    }
}
