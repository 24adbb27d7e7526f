//! Gateway error taxonomy.

use thiserror::Error;

/// Store access error.
///
/// These are **infrastructure errors** (reachability, auth, query rejection)
/// as opposed to domain errors. The gateway surfaces them unchanged — no
/// retry, no suppression; retry policy belongs to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached (network failure, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the credentials (or the operation needs a token).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store rejected the query as malformed.
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// The store reported the target resource as missing.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store answered, but the result tree did not decode into the
    /// expected shape.
    #[error("malformed result: {0}")]
    MalformedResult(String),

    /// Any other store-reported failure, passed through with its status.
    #[error("store error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl StoreError {
    pub fn malformed_result(err: impl core::fmt::Display) -> Self {
        Self::MalformedResult(err.to_string())
    }
}
