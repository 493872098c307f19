//! # Lost & Found Matcher
//!
//! Pairs pending lost reports with pending found reports by comparing item
//! name, location and vehicle.
//!
//! The matcher holds no state and never touches the ledger. Every call
//! recomputes candidates from the reports it is given.
//!
//! ## Scoring
//!
//! Points are summed in hundredths:
//!
//! | signal | points | rule |
//! |---|---|---|
//! | item name | 50 | case-insensitive equality, both non-empty |
//! | location | 30 | case-insensitive equality, both non-empty |
//! | vehicle | 20 | exact equality |
//!
//! A pair is a candidate when its points are strictly above the threshold
//! (50 by default), so a name match alone is not enough.
//!
//! ```rust
//! use lostfound_core::{NewReport, Report, ReportKind};
//! use lostfound_matcher::Matcher;
//!
//! let lost = NewReport::new(ReportKind::Lost, "Wallet").location("StationA");
//! let found = NewReport::new(ReportKind::Found, "wallet").location("stationa");
//! let lost = Report::from_new(1, lost, "");
//! let found = Report::from_new(2, found, "");
//!
//! let matches = Matcher::default().find_matches(&[lost, found]);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].score, 1.0);
//! ```

pub mod config;
pub mod matcher;

pub use config::{AbsentVehiclePolicy, MatchConfig};
pub use matcher::{MatchCandidate, Matcher};
