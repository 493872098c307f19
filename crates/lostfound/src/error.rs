//! Error types for the lost & found service.

use lostfound_ledger::LedgerError;
use thiserror::Error;

/// Errors from a report store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or refused the operation.
    #[error("backend error: {0}")]
    Backend(String),

    /// Stored data could not be decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum LostFoundError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("report not found: {0}")]
    ReportNotFound(u64),

    /// The submission was rejected before anything was stored.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, LostFoundError>;
