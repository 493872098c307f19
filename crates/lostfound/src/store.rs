//! ReportStore trait: where reports live outside the ledger.
//!
//! Reports are mutable (admins change their status) so they cannot sit on
//! the ledger. The service only needs the operations below; an in-memory
//! implementation is provided for tests and the demo.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use lostfound_core::{NewReport, Report, ReportStatus};

use crate::error::StoreError;

type Result<T> = std::result::Result<T, StoreError>;

/// Async interface for report persistence.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a submission and assign it the next id, starting at 1.
    async fn insert_report(&self, new: NewReport, created_at: String) -> Result<Report>;

    async fn get_report(&self, id: u64) -> Result<Option<Report>>;

    /// All reports in id order.
    async fn list_reports(&self) -> Result<Vec<Report>>;

    /// Reports with the given status, in id order.
    async fn list_by_status(&self, status: &ReportStatus) -> Result<Vec<Report>>;

    /// Set a report's status. `None` if no such report exists.
    async fn update_status(&self, id: u64, status: ReportStatus) -> Result<Option<Report>>;
}

/// In-memory report store. Contents are lost when it is dropped.
pub struct MemoryReportStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    reports: BTreeMap<u64, Report>,
    next_id: u64,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                reports: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().reports.is_empty()
    }
}

impl Default for MemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert_report(&self, new: NewReport, created_at: String) -> Result<Report> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let report = Report::from_new(id, new, created_at);
        inner.reports.insert(id, report.clone());
        Ok(report)
    }

    async fn get_report(&self, id: u64) -> Result<Option<Report>> {
        Ok(self.inner.read().reports.get(&id).cloned())
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        Ok(self.inner.read().reports.values().cloned().collect())
    }

    async fn list_by_status(&self, status: &ReportStatus) -> Result<Vec<Report>> {
        Ok(self
            .inner
            .read()
            .reports
            .values()
            .filter(|r| &r.status == status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: u64, status: ReportStatus) -> Result<Option<Report>> {
        let mut inner = self.inner.write();
        Ok(inner.reports.get_mut(&id).map(|report| {
            report.status = status;
            report.clone()
        }))
    }
}
