//! Error types for ShelfDB core.

use shelfdb_storage::StorageError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in ShelfDB core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage layer error (disk I/O or cancellation).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O error from file lifecycle operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record sequence could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A collection file holds content that does not decode as a record
    /// sequence. The file stays unreadable until externally fixed or
    /// purged; no repair is attempted.
    #[error("deserialization failed for {}: {source}", path.display())]
    Deserialization {
        /// The collection file that failed to decode.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The database directory does not exist and creating it was not
    /// requested.
    #[error("database directory does not exist: {}", path.display())]
    DirectoryNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// The database path exists but is not a directory.
    #[error("path is not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },
}

impl CoreError {
    /// Returns true if this error was caused by a cancellation flag.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_detection() {
        let err = CoreError::Storage(StorageError::Cancelled);
        assert!(err.is_cancelled());

        let err = CoreError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn messages_name_the_path() {
        let err = CoreError::DirectoryNotFound {
            path: PathBuf::from("/tmp/nope"),
        };
        assert!(err.to_string().contains("/tmp/nope"));
    }
}
