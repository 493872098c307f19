//! Receipts returned by appends.

use serde::{Deserialize, Serialize};
use std::fmt;

use lostfound_core::BlockHash;

/// Number of hex characters shown in a display id.
pub const DISPLAY_HEX_LEN: usize = 20;

/// Short user-facing label for a block: `0x` + 20 hex chars + `...`.
///
/// Presentational only. Never parse it back into a hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(String);

impl DisplayId {
    pub fn for_hash(hash: &BlockHash) -> Self {
        Self(format!("0x{}...", hash.short_hex(DISPLAY_HEX_LEN)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proof that a payload was appended: where it landed and under which hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub index: u64,
    pub hash: BlockHash,
    #[serde(rename = "displayId")]
    pub display_id: DisplayId,
}

impl Receipt {
    pub fn new(index: u64, hash: BlockHash) -> Self {
        Self {
            index,
            display_id: DisplayId::for_hash(&hash),
            hash,
        }
    }
}
