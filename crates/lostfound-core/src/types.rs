//! Strong type definitions for block linkage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::crypto::BlockHash;
use crate::error::CoreError;

/// The previous-hash value carried by the genesis block.
pub const GENESIS_SENTINEL: &str = "0";

/// Link from a block to its predecessor.
///
/// The genesis block has no predecessor and carries [`GENESIS_SENTINEL`]
/// instead of a digest. Both forms serialize as a plain string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviousHash {
    Genesis,
    Block(BlockHash),
}

impl PreviousHash {
    /// The string form that enters the block digest.
    pub fn as_string(&self) -> String {
        match self {
            PreviousHash::Genesis => GENESIS_SENTINEL.to_string(),
            PreviousHash::Block(hash) => hash.to_hex(),
        }
    }

    /// Parse the string form: the sentinel or a 64-char hex digest.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s == GENESIS_SENTINEL {
            Ok(PreviousHash::Genesis)
        } else {
            BlockHash::from_hex(s).map(PreviousHash::Block)
        }
    }

    pub fn is_genesis(&self) -> bool {
        matches!(self, PreviousHash::Genesis)
    }

    /// The linked digest, if this is not the sentinel.
    pub fn block_hash(&self) -> Option<&BlockHash> {
        match self {
            PreviousHash::Genesis => None,
            PreviousHash::Block(hash) => Some(hash),
        }
    }

    /// Whether this link points at the block with the given digest.
    pub fn links_to(&self, hash: &BlockHash) -> bool {
        self.block_hash() == Some(hash)
    }
}

impl From<BlockHash> for PreviousHash {
    fn from(hash: BlockHash) -> Self {
        PreviousHash::Block(hash)
    }
}

impl fmt::Debug for PreviousHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviousHash::Genesis => write!(f, "PreviousHash(genesis)"),
            PreviousHash::Block(hash) => write!(f, "PreviousHash({})", hash.short_hex(16)),
        }
    }
}

impl fmt::Display for PreviousHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Serialize for PreviousHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for PreviousHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
