//! Durable document storage abstraction.
//!
//! Persistence in this system is deliberately primitive: a handful of keyed
//! text documents, each read once at startup and rewritten wholesale after
//! every mutation of the collection it holds. There is no incremental
//! diffing and no transaction boundary beyond a single write.
//!
//! The trait lives in core so reducer-adjacent code (the startup loaders)
//! and the runtime shell share one seam; concrete implementations are the
//! file-backed store in `vitrine-runtime` and the in-memory doubles in
//! `vitrine-testing`.

use thiserror::Error;

/// Error type for document storage operations.
///
/// Callers on the mutation path never propagate these: a failed write is
/// logged and swallowed, and an unreadable document at startup falls back
/// to a default collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure (missing directory, quota, permissions).
    #[error("storage I/O failure for {key}: {source}")]
    Io {
        /// Document key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing store rejected the write.
    #[error("storage rejected write for {key}: {reason}")]
    WriteRejected {
        /// Document key being written.
        key: String,
        /// Store-specific reason.
        reason: String,
    },
}

/// A keyed store of whole text documents.
pub trait DocumentStore: Send + Sync {
    /// Read the full document under `key`.
    ///
    /// Returns `Ok(None)` when no document has ever been written; callers
    /// treat that the same as malformed contents and fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store itself cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the full document under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write cannot be completed. The
    /// previous document contents are left in an unspecified but readable
    /// state on failure.
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError>;
}
