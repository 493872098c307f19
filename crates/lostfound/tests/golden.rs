//! Golden vectors replayed through the public API.
//!
//! The ledger must reproduce the pinned block hashes byte for byte when fed
//! the same timestamps and payloads.

use std::sync::Arc;

use lostfound::{Ledger, LedgerConfig};
use lostfound_testkit::vectors::{all_vectors, block_from_vector, VECTOR_TIMESTAMPS};
use lostfound_testkit::ScriptedTimeSource;

fn scripted_ledger() -> Ledger {
    Ledger::with_time_source(
        LedgerConfig::default(),
        Arc::new(ScriptedTimeSource::from_strs(&VECTOR_TIMESTAMPS)),
    )
}

#[test]
fn test_vectors_verify() {
    for vector in all_vectors() {
        let block = block_from_vector(&vector);
        assert_eq!(
            block.hash().to_hex(),
            vector.expected_hash,
            "hash mismatch for {}",
            vector.name
        );
        assert_eq!(
            lostfound::core::canonical_payload_json(block.payload()),
            vector.expected_data,
            "canonical data mismatch for {}",
            vector.name
        );
    }
}

#[test]
fn test_vectors_deterministic() {
    let first: Vec<String> = all_vectors()
        .iter()
        .map(|v| block_from_vector(v).hash().to_hex())
        .collect();
    let second: Vec<String> = all_vectors()
        .iter()
        .map(|v| block_from_vector(v).hash().to_hex())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_ledger_replay_reproduces_vectors() {
    let ledger = scripted_ledger();
    let vectors = all_vectors();

    assert_eq!(ledger.genesis().hash().to_hex(), vectors[0].expected_hash);
    for vector in &vectors[1..] {
        let receipt = ledger.append(vector.payload.clone()).unwrap();
        assert_eq!(receipt.index, vector.index);
        assert_eq!(receipt.hash.to_hex(), vector.expected_hash, "{}", vector.name);
    }
    assert!(ledger.is_valid());
}

#[test]
fn test_genesis_canonical_bytes() {
    let genesis = scripted_ledger().genesis();
    assert_eq!(
        genesis.canonical_json(),
        r#"{"data": {"message": "Genesis Block for Lost & Found System"}, "index": 0, "previous_hash": "0", "timestamp": "2025-01-15 10:00:00.000000"}"#
    );
}

#[test]
fn test_linked_block_canonical_bytes() {
    let vectors = all_vectors();
    let block = block_from_vector(&vectors[3]);
    let json = block.canonical_json();
    assert!(json.starts_with(r#"{"data": {"count": -42, "flag": true, "note": "tab\there \ud83d\udd11 \\ \u007f"}, "index": 3, "previous_hash": "ea29e7c4"#));
    assert!(json.ends_with(r#""timestamp": "2025-01-15 10:07:00.000000"}"#));
    assert!(json.is_ascii());
}
