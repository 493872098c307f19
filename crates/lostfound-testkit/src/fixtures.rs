//! Test fixtures and helpers.
//!
//! Deterministic clocks, sample reports, and ready-made services.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDateTime;

use lostfound::{LostFound, LostFoundConfig, MemoryReportStore};
use lostfound_core::{NewReport, Report, ReportKind, ReportStatus};
use lostfound_ledger::{FixedTimeSource, Ledger, LedgerConfig, TimeSource};

/// Parse `YYYY-MM-DD HH:MM:SS[.ffffff]`.
pub fn instant(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .unwrap_or_else(|e| panic!("bad instant {s:?}: {e}"))
}

/// The instant every fixture clock starts at.
pub fn epoch() -> NaiveDateTime {
    instant("2025-01-15 10:00:00")
}

/// Replays a fixed list of instants, then repeats the last one.
#[derive(Debug)]
pub struct ScriptedTimeSource {
    instants: Vec<NaiveDateTime>,
    next: AtomicUsize,
}

impl ScriptedTimeSource {
    pub fn new(instants: Vec<NaiveDateTime>) -> Self {
        assert!(!instants.is_empty(), "scripted clock needs at least one instant");
        Self {
            instants,
            next: AtomicUsize::new(0),
        }
    }

    pub fn from_strs(instants: &[&str]) -> Self {
        Self::new(instants.iter().map(|s| instant(s)).collect())
    }
}

impl TimeSource for ScriptedTimeSource {
    fn now(&self) -> NaiveDateTime {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.instants[i.min(self.instants.len() - 1)]
    }
}

/// A ledger whose every block is stamped with [`epoch`].
pub fn fixed_ledger() -> Ledger {
    Ledger::with_time_source(LedgerConfig::default(), Arc::new(FixedTimeSource(epoch())))
}

/// A service over a memory store with a fixed clock.
pub fn memory_service() -> LostFound<MemoryReportStore> {
    memory_service_with(LostFoundConfig::default())
}

pub fn memory_service_with(config: LostFoundConfig) -> LostFound<MemoryReportStore> {
    LostFound::with_time_source(
        MemoryReportStore::new(),
        config,
        Arc::new(FixedTimeSource(epoch())),
    )
}

/// Lost wallet on BUS001 at Central Station.
pub fn lost_wallet() -> NewReport {
    NewReport::new(ReportKind::Lost, "Test Wallet")
        .description("Black leather wallet")
        .location("Central Station")
        .vehicle_id("BUS001")
        .contact_info("test@example.com")
}

/// The same wallet, handed in by a driver.
pub fn found_wallet() -> NewReport {
    NewReport::new(ReportKind::Found, "test wallet")
        .location("central station")
        .vehicle_id("BUS001")
}

/// A stored report with the given fields and status `pending`.
pub fn report(
    id: u64,
    kind: ReportKind,
    item_name: &str,
    location: Option<&str>,
    vehicle_id: Option<&str>,
) -> Report {
    let mut new = NewReport::new(kind, item_name);
    new.location = location.map(str::to_string);
    new.vehicle_id = vehicle_id.map(str::to_string);
    Report::from_new(id, new, "2025-01-15 10:00:00")
}

/// [`report`] with a non-pending status.
pub fn report_with_status(
    id: u64,
    kind: ReportKind,
    item_name: &str,
    status: &str,
) -> Report {
    let mut report = report(id, kind, item_name, None, None);
    report.status = ReportStatus::from(status);
    report
}
