//! Error types for the ledger.

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A report payload broke the submission contract. Nothing was appended.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// An imported chain is structurally unusable.
    #[error("invalid chain: {0}")]
    InvalidChain(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
