//! Block: one immutable, hash-addressed ledger entry.
//!
//! A block's hash is computed once, at construction, from its index,
//! timestamp, payload and previous hash. Fields are private and there is no
//! mutation API; a changed record is always a new block.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_block_json;
use crate::crypto::BlockHash;
use crate::payload::Payload;
use crate::types::PreviousHash;

/// Digest of the four hashed block fields.
pub fn compute_block_hash(
    index: u64,
    timestamp: &str,
    payload: &Payload,
    previous_hash: &PreviousHash,
) -> BlockHash {
    BlockHash::hash(canonical_block_json(index, timestamp, payload, previous_hash).as_bytes())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    index: u64,
    timestamp: String,
    payload: Payload,
    previous_hash: PreviousHash,
    hash: BlockHash,
}

impl Block {
    /// Build a block and freeze its hash.
    pub fn new(
        index: u64,
        timestamp: impl Into<String>,
        payload: Payload,
        previous_hash: PreviousHash,
    ) -> Self {
        let timestamp = timestamp.into();
        let hash = compute_block_hash(index, &timestamp, &payload, &previous_hash);
        Self {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// Rehydrate a block from stored fields, keeping the stored hash as-is.
    ///
    /// Nothing is checked here; chain validation reports any mismatch.
    pub fn from_parts(
        index: u64,
        timestamp: impl Into<String>,
        payload: Payload,
        previous_hash: PreviousHash,
        hash: BlockHash,
    ) -> Self {
        Self {
            index,
            timestamp: timestamp.into(),
            payload,
            previous_hash,
            hash,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn previous_hash(&self) -> &PreviousHash {
        &self.previous_hash
    }

    /// The hash frozen at construction.
    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    /// Recompute the digest from the other four fields.
    ///
    /// Used for verification only; the result is never stored.
    pub fn recompute_hash(&self) -> BlockHash {
        compute_block_hash(self.index, &self.timestamp, &self.payload, &self.previous_hash)
    }

    /// Whether the stored hash matches the block's own fields.
    pub fn is_self_consistent(&self) -> bool {
        self.recompute_hash() == self.hash
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.previous_hash.is_genesis()
    }

    /// The canonical text that the hash is computed over.
    pub fn canonical_json(&self) -> String {
        canonical_block_json(self.index, &self.timestamp, &self.payload, &self.previous_hash)
    }

    /// Read-only, serializable copy of every field.
    pub fn to_view(&self) -> BlockView {
        BlockView::from(self)
    }
}

/// Serializable read-only copy of a block.
///
/// Snapshots hand these out so callers never hold references into the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub index: u64,
    pub timestamp: String,
    pub payload: Payload,
    pub previous_hash: PreviousHash,
    pub hash: BlockHash,
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        Self {
            index: block.index,
            timestamp: block.timestamp.clone(),
            payload: block.payload.clone(),
            previous_hash: block.previous_hash,
            hash: block.hash,
        }
    }
}

impl From<BlockView> for Block {
    fn from(view: BlockView) -> Self {
        Block::from_parts(
            view.index,
            view.timestamp,
            view.payload,
            view.previous_hash,
            view.hash,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis() -> Block {
        Block::new(
            0,
            "2025-01-15 10:00:00.000000",
            Payload::new().with("message", "Genesis Block for Lost & Found System"),
            PreviousHash::Genesis,
        )
    }

    #[test]
    fn test_genesis_block_hash_matches_known_digest() {
        let block = genesis();
        assert!(block.is_genesis());
        assert_eq!(
            block.hash().to_hex(),
            "0c8a76547e991e11246e6e9d080931fb76b37c562cc9c81c6809f2cf9b85917d"
        );
    }

    #[test]
    fn test_recompute_matches_construction() {
        let block = genesis();
        assert_eq!(block.recompute_hash(), *block.hash());
        assert!(block.is_self_consistent());
    }

    #[test]
    fn test_hash_depends_on_every_field() {
        let base = genesis();
        let payload = base.payload().clone();

        let other_index = Block::new(1, base.timestamp(), payload.clone(), PreviousHash::Genesis);
        let other_ts = Block::new(0, "later", payload.clone(), PreviousHash::Genesis);
        let other_payload = Block::new(
            0,
            base.timestamp(),
            payload.clone().with("extra", 1i64),
            PreviousHash::Genesis,
        );
        let other_prev = Block::new(
            0,
            base.timestamp(),
            payload,
            PreviousHash::Block(*base.hash()),
        );

        for other in [other_index, other_ts, other_payload, other_prev] {
            assert_ne!(other.hash(), base.hash());
        }
    }

    #[test]
    fn test_from_parts_keeps_stored_hash() {
        let base = genesis();
        let forged = Block::from_parts(
            base.index(),
            "tampered",
            base.payload().clone(),
            *base.previous_hash(),
            *base.hash(),
        );
        assert_eq!(forged.hash(), base.hash());
        assert!(!forged.is_self_consistent());
    }

    #[test]
    fn test_view_roundtrip_preserves_block() {
        let block = genesis();
        let view = block.to_view();
        assert_eq!(view.hash, *block.hash());
        assert_eq!(Block::from(view), block);
    }

    #[test]
    fn test_view_json_shape() {
        let view = genesis().to_view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["previous_hash"], "0");
        assert_eq!(json["payload"]["message"], "Genesis Block for Lost & Found System");
        assert_eq!(json["hash"].as_str().map(str::len), Some(64));

        let back: BlockView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }
}
