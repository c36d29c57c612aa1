//! Error types for composer-dev-switch.
//!
//! All operations return `Result<T>` which aliases `Result<T, SwitchError>`.
//! Every variant is terminal: the binary reports it, reprints usage and
//! exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from switch operations.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Bad command-line invocation.
    #[error("{0}")]
    Usage(String),

    /// Root manifest does not exist.
    #[error("composer.json file not found: {0}")]
    ManifestFileMissing(PathBuf),

    /// Root manifest exists but cannot be read.
    #[error("composer.json file is not readable: {0}")]
    ManifestFileUnreadable(PathBuf),

    /// Root manifest exists but cannot be written.
    #[error("composer.json file is not writable: {0}")]
    ManifestFileUnwritable(PathBuf),

    /// Manifest is absent, unreadable or not well-formed JSON.
    #[error("composer.json file seems to be invalid: {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// Target path is not an existing directory.
    #[error("Path '{0}' is not a directory")]
    NotADirectory(String),

    /// Target directory has no composer.json.
    #[error("No composer.json file found in path '{0}'")]
    ManifestMissing(String),

    /// Target manifest has no usable `name` entry.
    #[error("'name' entry not found in {0}")]
    IdentityMissing(PathBuf),

    /// Final write of the root manifest failed.
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwitchError {
    pub(crate) fn invalid_manifest(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SwitchError::InvalidManifest {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for composer-dev-switch operations.
pub type Result<T> = std::result::Result<T, SwitchError>;
