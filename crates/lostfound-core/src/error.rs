//! Error types for the lost & found core.

use thiserror::Error;

/// Core errors raised while parsing or rehydrating ledger data.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("unknown report kind: {0}")]
    UnknownReportKind(String),
}

/// Why a chain failed validation.
///
/// Callers that only need the boolean answer use
/// [`is_chain_valid`](crate::validation::is_chain_valid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The stored hash is not the digest of the block's own fields.
    #[error("hash mismatch at block {index}")]
    HashMismatch { index: u64 },

    /// The block's previous hash does not point at its predecessor.
    #[error("broken link at block {index}")]
    BrokenLink { index: u64 },
}

impl ChainError {
    /// Index of the block that failed the check.
    pub fn index(&self) -> u64 {
        match self {
            ChainError::HashMismatch { index } | ChainError::BrokenLink { index } => *index,
        }
    }
}
