//! # Lost & Found
//!
//! Lost and found reports for a transit network, with every submission
//! recorded on a tamper-evident hash-chained ledger.
//!
//! ## Overview
//!
//! - **Reports** live in a [`ReportStore`]. Their status can change.
//! - **Ledger entries** record each submission once and never change.
//!   Editing any recorded field breaks the chain and is caught by validation.
//! - **Matches** pair pending lost reports with pending found reports. They
//!   are recomputed on demand and never written anywhere.
//!
//! [`LostFound`] wires the three together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lostfound::{LostFound, LostFoundConfig, MemoryReportStore, NewReport, ReportKind};
//!
//! async fn example() -> lostfound::Result<()> {
//!     let app = LostFound::new(MemoryReportStore::new(), LostFoundConfig::default());
//!
//!     let lost = NewReport::new(ReportKind::Lost, "Wallet").vehicle_id("BUS001");
//!     let submitted = app.submit_report(lost).await?;
//!     println!("recorded at {}", submitted.receipt.display_id);
//!
//!     let verification = app.verify_report(submitted.report.id);
//!     assert!(verification.exists);
//!     assert!(app.chain().valid);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `lostfound::core` - Blocks, hashing, validation, report model
//! - `lostfound::ledger` - The append-only ledger
//! - `lostfound::matcher` - Lost/found pairing

pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use lostfound_core as core;
pub use lostfound_ledger as ledger;
pub use lostfound_matcher as matcher;

pub use config::LostFoundConfig;
pub use error::{LostFoundError, Result, StoreError};
pub use service::{ChainSummary, LostFound, SubmissionReceipt, Verification};
pub use store::{MemoryReportStore, ReportStore};

pub use lostfound_core::{
    is_chain_valid, validate_chain, Block, BlockHash, BlockView, ChainError, NewReport,
    Payload, PayloadValue, PreviousHash, Report, ReportEntry, ReportKind, ReportStatus,
};
pub use lostfound_ledger::{Ledger, LedgerConfig, Receipt, SystemTimeSource, TimeSource};
pub use lostfound_matcher::{AbsentVehiclePolicy, MatchCandidate, MatchConfig, Matcher};
