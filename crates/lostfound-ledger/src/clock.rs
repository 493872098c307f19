//! Time source for block and report timestamps.
//!
//! The ledger never reads the wall clock directly. Tests inject a fixed or
//! stepping clock so digests are reproducible.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Block timestamps: local time with microseconds.
pub const BLOCK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Report creation timestamps: local time to the second.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// `now()` rendered for a block header.
    fn block_timestamp(&self) -> String {
        self.now().format(BLOCK_TIMESTAMP_FORMAT).to_string()
    }

    /// `now()` rendered for a report record.
    fn report_timestamp(&self) -> String {
        self.now().format(REPORT_TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub NaiveDateTime);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Starts at a given instant and advances by a fixed step on every read.
#[derive(Debug)]
pub struct SteppingTimeSource {
    start: NaiveDateTime,
    step_micros: i64,
    reads: AtomicI64,
}

impl SteppingTimeSource {
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self {
            start,
            step_micros: step.num_microseconds().unwrap_or(i64::MAX),
            reads: AtomicI64::new(0),
        }
    }
}

impl TimeSource for SteppingTimeSource {
    fn now(&self) -> NaiveDateTime {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::microseconds(n.saturating_mul(self.step_micros))
    }
}
