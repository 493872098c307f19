//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// Message stored in the genesis block payload.
pub const DEFAULT_GENESIS_MESSAGE: &str = "Genesis Block for Lost & Found System";

/// Configuration for a [`Ledger`](crate::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Stored under `message` in block 0.
    pub genesis_message: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            genesis_message: DEFAULT_GENESIS_MESSAGE.to_string(),
        }
    }
}
