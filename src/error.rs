//! Error types for gopkg-pin.
//!
//! All operations return `Result<T>` which aliases `Result<T, PinError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from pin operations.
#[derive(Debug, Error)]
pub enum PinError {
    /// Manifest could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No branch, version, or revision was supplied.
    #[error("one of --branch, --version or --revision is required")]
    MissingConstraint,

    /// Dependency name the caller supplied is unusable.
    #[error("invalid dependency name '{0}': {1}")]
    InvalidName(String, String),

    /// Atomic rename of the staged output failed.
    #[error("failed to replace manifest: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gopkg-pin operations.
pub type Result<T> = std::result::Result<T, PinError>;
