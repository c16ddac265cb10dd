//! Error types for the DevLog core.

use thiserror::Error;

/// All errors that can surface from the session manager, the report
/// aggregator, or the session store.
///
/// Every variant is terminal for the current invocation: nothing is
/// retried, and each operation performs at most one persisted mutation,
/// so a failure never leaves the store inconsistent.
#[derive(Debug, Error)]
pub enum DevlogError {
    /// Bad or missing input (empty description, conflicting flags).
    #[error("{0}")]
    Validation(String),

    /// An invariant would be violated (e.g. starting while a session is active).
    #[error("{0}")]
    Conflict(String),

    /// The operation requires state that does not exist (e.g. stopping with
    /// no active session).
    #[error("{0}")]
    NotFound(String),

    /// A SQLite operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// An I/O operation on the filesystem failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be serialized or deserialized.
    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`DevlogError`].
pub type Result<T> = std::result::Result<T, DevlogError>;
