//! # Lost & Found Core
//!
//! Pure primitives for the lost & found ledger: blocks, canonical hashing,
//! chain validation and the report model.
//!
//! This crate contains no I/O, no locking, no clocks. It is pure computation
//! over hash-linked records.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable, hash-addressed ledger entry
//! - [`BlockHash`] - SHA-256 digest identifying a block
//! - [`PreviousHash`] - Link to the preceding block (or the genesis sentinel)
//! - [`Payload`] - Sorted string-keyed map of primitive values
//! - [`ReportEntry`] - Typed payload for a report submission
//! - [`Report`] - A lost or found report as held by a report store
//!
//! ## Canonicalization
//!
//! Block digests are SHA-256 over sorted-key ASCII JSON. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod report;
pub mod types;
pub mod validation;

pub use block::{compute_block_hash, Block, BlockView};
pub use canonical::{canonical_block_json, canonical_payload_json};
pub use crypto::BlockHash;
pub use error::{ChainError, CoreError};
pub use payload::{Payload, PayloadValue, ReportEntry, REPORT_EVENT_TYPE};
pub use report::{NewReport, Report, ReportKind, ReportStatus};
pub use types::{PreviousHash, GENESIS_SENTINEL};
pub use validation::{is_chain_valid, validate_chain};
