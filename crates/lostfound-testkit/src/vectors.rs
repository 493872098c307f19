//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the canonical `data` encoding and the SHA-256 block hash
//! for one block of a four-block chain. The expected values were produced by
//! an independent sorted-key JSON encoder, so any drift in key order,
//! separators or string escaping shows up here first.

use serde::Serialize;

use lostfound_core::{
    canonical_payload_json, Block, BlockHash, Payload, PreviousHash, ReportEntry, ReportKind,
};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub index: u64,
    pub timestamp: &'static str,
    pub payload: Payload,
    /// `"0"` for genesis, otherwise the hash of the previous vector.
    pub previous_hash: &'static str,
    /// Expected canonical encoding of `payload`.
    pub expected_data: &'static str,
    /// Expected block hash (hex).
    pub expected_hash: &'static str,
}

pub const GENESIS_HASH: &str = "0c8a76547e991e11246e6e9d080931fb76b37c562cc9c81c6809f2cf9b85917d";
pub const LOST_REPORT_HASH: &str =
    "6ee5c16e508f66030d586f8b7eb5b8eece07a8f8bd57c43610cd25865339b4c6";
pub const FOUND_REPORT_HASH: &str =
    "ea29e7c4aea846d4ba2578565b30cf9c66054409b0ecd578621949c3e877a15d";
pub const MIXED_VALUES_HASH: &str =
    "26090956e70095d185df30bf6372136bde433efc7fd9bfc1601b910334dace2d";

/// Block timestamps of the vectors, in chain order.
pub const VECTOR_TIMESTAMPS: [&str; 4] = [
    "2025-01-15 10:00:00.000000",
    "2025-01-15 10:05:00.000000",
    "2025-01-15 10:06:00.000000",
    "2025-01-15 10:07:00.000000",
];

/// Get all golden test vectors, in chain order.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis",
            index: 0,
            timestamp: VECTOR_TIMESTAMPS[0],
            payload: Payload::new().with("message", "Genesis Block for Lost & Found System"),
            previous_hash: "0",
            expected_data: r#"{"message": "Genesis Block for Lost & Found System"}"#,
            expected_hash: GENESIS_HASH,
        },
        GoldenVector {
            name: "lost report with vehicle",
            index: 1,
            timestamp: VECTOR_TIMESTAMPS[1],
            payload: ReportEntry::new(1, ReportKind::Lost, "2025-01-15 10:04:59")
                .item_name("Test iPhone")
                .vehicle_id("BUS001")
                .to_payload(),
            previous_hash: GENESIS_HASH,
            expected_data: r#"{"item_name": "Test iPhone", "report_id": 1, "report_type": "lost", "timestamp": "2025-01-15 10:04:59", "type": "report", "vehicle_id": "BUS001"}"#,
            expected_hash: LOST_REPORT_HASH,
        },
        GoldenVector {
            name: "found report with escapes and null vehicle",
            index: 2,
            timestamp: VECTOR_TIMESTAMPS[2],
            payload: ReportEntry::new(2, ReportKind::Found, "2025-01-15 10:05:30")
                .item_name("Caf\u{e9} \"Keys\"\n")
                .to_payload(),
            previous_hash: LOST_REPORT_HASH,
            expected_data: r#"{"item_name": "Caf\u00e9 \"Keys\"\n", "report_id": 2, "report_type": "found", "timestamp": "2025-01-15 10:05:30", "type": "report", "vehicle_id": null}"#,
            expected_hash: FOUND_REPORT_HASH,
        },
        GoldenVector {
            name: "non-report payload with mixed values",
            index: 3,
            timestamp: VECTOR_TIMESTAMPS[3],
            payload: Payload::new()
                .with("note", "tab\there \u{1F511} \\ \u{7f}")
                .with("count", -42i64)
                .with("flag", true),
            previous_hash: FOUND_REPORT_HASH,
            expected_data: r#"{"count": -42, "flag": true, "note": "tab\there \ud83d\udd11 \\ \u007f"}"#,
            expected_hash: MIXED_VALUES_HASH,
        },
    ]
}

/// Build the block described by a vector.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    let previous = PreviousHash::parse(vector.previous_hash)
        .unwrap_or_else(|e| panic!("{}: bad previous hash: {e}", vector.name));
    Block::new(vector.index, vector.timestamp, vector.payload.clone(), previous)
}

/// Every vector's block, in chain order.
pub fn vector_chain() -> Vec<Block> {
    all_vectors().iter().map(block_from_vector).collect()
}

/// Check every vector, returning the names of the ones that fail.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .iter()
        .filter(|v| {
            let block = block_from_vector(v);
            canonical_payload_json(block.payload()) != v.expected_data
                || block.hash().to_hex() != v.expected_hash
        })
        .map(|v| v.name)
        .collect()
}

/// Parse a vector's expected hash.
pub fn expected_hash(vector: &GoldenVector) -> BlockHash {
    BlockHash::from_hex(vector.expected_hash)
        .unwrap_or_else(|e| panic!("{}: bad expected hash: {e}", vector.name))
}
