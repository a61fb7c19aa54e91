//! Session error types.

use thiserror::Error;

/// Errors from reading or writing client-side session data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No key/value storage is available (no window, storage disabled, or
    /// not running in a browser).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A storage read or write failed.
    #[error("Storage operation failed: {0}")]
    Storage(String),

    /// A role string that is not admin, vendedor or cliente.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
