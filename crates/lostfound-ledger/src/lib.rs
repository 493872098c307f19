//! # Lost & Found Ledger
//!
//! The append-only chain that records report submissions.
//!
//! ## Overview
//!
//! A [`Ledger`] is created once, with its genesis block, by the application's
//! composition root and shared by handle. It grows one block per
//! [`Ledger::append`] and never shrinks, reorders or edits a block.
//!
//! ## Key Types
//!
//! - [`Ledger`] - The chain, its single writer path and its readers
//! - [`Receipt`] - Proof of inclusion returned by an append
//! - [`TimeSource`] - Where block timestamps come from
//! - [`LedgerConfig`] - Genesis message
//!
//! ## Usage
//!
//! ```rust
//! use lostfound_core::{ReportEntry, ReportKind};
//! use lostfound_ledger::{Ledger, LedgerConfig};
//!
//! let ledger = Ledger::new(LedgerConfig::default());
//! let entry = ReportEntry::new(1, ReportKind::Lost, "2025-01-15 10:04:59")
//!     .item_name("Test iPhone")
//!     .vehicle_id("BUS001");
//! let receipt = ledger.append_report(&entry);
//!
//! assert_eq!(receipt.index, 1);
//! assert!(ledger.is_valid());
//! assert!(ledger.find_report(1).is_some());
//! ```
//!
//! ## Concurrency
//!
//! The chain sits behind one `RwLock`. Appends hold the write lock for the
//! whole read-head/build/push sequence, so they are serialized and readers
//! never see a half-appended block.

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod receipt;

pub use clock::{FixedTimeSource, SteppingTimeSource, SystemTimeSource, TimeSource};
pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use receipt::{DisplayId, Receipt};
