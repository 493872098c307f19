//! # Lost & Found Testkit
//!
//! Testing utilities for the lost & found ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Blocks with pinned canonical encodings and hashes
//! - **Generators**: Proptest strategies for payloads and report entries
//! - **Fixtures**: Deterministic clocks, sample reports, ready-made services
//!
//! ## Golden Vectors
//!
//! ```rust
//! use lostfound_testkit::vectors::{all_vectors, block_from_vector};
//!
//! for vector in all_vectors() {
//!     let block = block_from_vector(&vector);
//!     assert_eq!(block.hash().to_hex(), vector.expected_hash);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use lostfound_testkit::generators::payload;
//!
//! proptest! {
//!     #[test]
//!     fn encoding_is_ascii(data in payload(8)) {
//!         let json = lostfound_core::canonical_payload_json(&data);
//!         prop_assert!(json.is_ascii());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use lostfound_testkit::fixtures::fixed_ledger;
//!
//! let ledger = fixed_ledger();
//! assert_eq!(ledger.genesis().timestamp(), "2025-01-15 10:00:00.000000");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    epoch, fixed_ledger, found_wallet, instant, lost_wallet, memory_service,
    memory_service_with, report, report_with_status, ScriptedTimeSource,
};
pub use generators::{payload, payload_value, report_entry, report_kind, text};
pub use vectors::{all_vectors, block_from_vector, vector_chain, verify_all_vectors, GoldenVector};
