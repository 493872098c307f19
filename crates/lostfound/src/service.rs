//! The LostFound service: store, ledger and matcher behind one API.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use lostfound_core::{BlockView, NewReport, Report, ReportStatus};
use lostfound_ledger::{Ledger, Receipt, SystemTimeSource, TimeSource};
use lostfound_matcher::{MatchCandidate, Matcher};

use crate::config::LostFoundConfig;
use crate::error::{LostFoundError, Result};
use crate::store::ReportStore;

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub report: Report,
    /// Where the submission landed on the ledger.
    pub receipt: Receipt,
}

/// Whether a report's submission is on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub exists: bool,
    pub block: Option<BlockView>,
}

/// The whole chain with its length and validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub chain: Vec<BlockView>,
    pub length: usize,
    pub valid: bool,
}

/// Composition root for the lost & found system.
///
/// Owns the single [`Ledger`] for the process and hands it out by `Arc`.
pub struct LostFound<S: ReportStore> {
    store: Arc<S>,
    ledger: Arc<Ledger>,
    matcher: Matcher,
    clock: Arc<dyn TimeSource>,
}

impl<S: ReportStore> LostFound<S> {
    /// Create the service with a fresh ledger and the wall clock.
    pub fn new(store: S, config: LostFoundConfig) -> Self {
        Self::with_time_source(store, config, Arc::new(SystemTimeSource))
    }

    /// Create the service with an injected clock, shared by the ledger and
    /// report timestamps.
    pub fn with_time_source(store: S, config: LostFoundConfig, clock: Arc<dyn TimeSource>) -> Self {
        let ledger = Ledger::with_time_source(config.ledger, Arc::clone(&clock));
        Self::with_ledger(store, Arc::new(ledger), Matcher::new(config.matcher), clock)
    }

    /// Assemble the service around an existing ledger.
    pub fn with_ledger(
        store: S,
        ledger: Arc<Ledger>,
        matcher: Matcher,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            store: Arc::new(store),
            ledger,
            matcher,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ledger(&self) -> Arc<Ledger> {
        Arc::clone(&self.ledger)
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submissions
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a new report and record its submission on the ledger.
    ///
    /// The report must name an item. The ledger entry carries the report id,
    /// kind, item name, vehicle id and creation timestamp.
    pub async fn submit_report(&self, new: NewReport) -> Result<SubmissionReceipt> {
        match new.item_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {}
            _ => {
                return Err(LostFoundError::InvalidReport(
                    "item_name must not be empty".into(),
                ))
            }
        }

        let report = self
            .store
            .insert_report(new, self.clock.report_timestamp())
            .await?;
        let receipt = self.ledger.append_report(&report.ledger_entry());

        info!(
            report_id = report.id,
            kind = %report.kind,
            block = receipt.index,
            display_id = %receipt.display_id,
            "report submitted"
        );
        Ok(SubmissionReceipt { report, receipt })
    }

    /// Look up the submission block for a report.
    pub fn verify_report(&self, report_id: u64) -> Verification {
        let block = self.ledger.find_report(report_id).map(|b| b.to_view());
        debug!(report_id, found = block.is_some(), "verified report");
        Verification {
            exists: block.is_some(),
            block,
        }
    }

    /// Full chain snapshot with its validity.
    pub fn chain(&self) -> ChainSummary {
        let chain = self.ledger.snapshot();
        ChainSummary {
            length: chain.len(),
            valid: self.ledger.is_valid(),
            chain,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn get_report(&self, id: u64) -> Result<Option<Report>> {
        Ok(self.store.get_report(id).await?)
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        Ok(self.store.list_reports().await?)
    }

    /// Admin status change. Not recorded on the ledger.
    pub async fn update_status(&self, id: u64, status: ReportStatus) -> Result<Report> {
        let report = self
            .store
            .update_status(id, status)
            .await?
            .ok_or(LostFoundError::ReportNotFound(id))?;
        info!(report_id = id, status = %report.status, "report status updated");
        Ok(report)
    }

    /// Candidate pairs among pending reports.
    pub async fn find_matches(&self) -> Result<Vec<MatchCandidate>> {
        let pending = self.store.list_by_status(&ReportStatus::Pending).await?;
        Ok(self.matcher.find_matches(&pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryReportStore;
    use lostfound_core::ReportKind;
    use lostfound_ledger::FixedTimeSource;

    fn app() -> LostFound<MemoryReportStore> {
        let clock = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
            .and_then(|d| d.and_hms_opt(10, 4, 59))
            .unwrap();
        LostFound::with_time_source(
            MemoryReportStore::new(),
            LostFoundConfig::default(),
            Arc::new(FixedTimeSource(clock)),
        )
    }

    #[tokio::test]
    async fn test_submit_appends_entry() {
        let app = app();
        let submitted = app
            .submit_report(NewReport::new(ReportKind::Lost, "Test iPhone").vehicle_id("BUS001"))
            .await
            .unwrap();

        assert_eq!(submitted.report.id, 1);
        assert_eq!(submitted.report.created_at, "2025-01-15 10:04:59");
        assert_eq!(submitted.receipt.index, 1);

        let block = app.ledger().get(1).unwrap();
        let payload = block.payload();
        assert_eq!(payload.get_str("type"), Some("report"));
        assert_eq!(payload.get_int("report_id"), Some(1));
        assert_eq!(payload.get_str("report_type"), Some("lost"));
        assert_eq!(payload.get_str("item_name"), Some("Test iPhone"));
        assert_eq!(payload.get_str("vehicle_id"), Some("BUS001"));
        assert_eq!(payload.get_str("timestamp"), Some("2025-01-15 10:04:59"));
    }

    #[tokio::test]
    async fn test_empty_item_name_rejected_before_store_or_ledger() {
        let app = app();
        let err = app
            .submit_report(NewReport::new(ReportKind::Found, "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, LostFoundError::InvalidReport(_)));
        assert!(app.store().is_empty());
        assert_eq!(app.ledger().len(), 1);
    }

    #[tokio::test]
    async fn test_verify_report() {
        let app = app();
        app.submit_report(NewReport::new(ReportKind::Lost, "Wallet"))
            .await
            .unwrap();

        let verified = app.verify_report(1);
        assert!(verified.exists);
        assert_eq!(verified.block.unwrap().index, 1);

        let missing = app.verify_report(2);
        assert!(!missing.exists);
        assert!(missing.block.is_none());
    }

    #[tokio::test]
    async fn test_chain_summary() {
        let app = app();
        app.submit_report(NewReport::new(ReportKind::Lost, "Wallet"))
            .await
            .unwrap();

        let summary = app.chain();
        assert_eq!(summary.length, 2);
        assert_eq!(summary.chain.len(), 2);
        assert!(summary.valid);
    }

    #[tokio::test]
    async fn test_status_update_is_not_on_ledger() {
        let app = app();
        app.submit_report(NewReport::new(ReportKind::Lost, "Wallet"))
            .await
            .unwrap();

        let updated = app
            .update_status(1, ReportStatus::from("matched"))
            .await
            .unwrap();
        assert_eq!(updated.status.as_str(), "matched");
        assert_eq!(app.ledger().len(), 2);
        assert!(app.chain().valid);

        let err = app
            .update_status(99, ReportStatus::from("closed"))
            .await
            .unwrap_err();
        assert!(matches!(err, LostFoundError::ReportNotFound(99)));
    }

    #[tokio::test]
    async fn test_matches_only_pending() {
        let app = app();
        app.submit_report(
            NewReport::new(ReportKind::Lost, "Wallet")
                .location("StationA")
                .vehicle_id("BUS001"),
        )
        .await
        .unwrap();
        app.submit_report(
            NewReport::new(ReportKind::Found, "wallet")
                .location("StationA")
                .vehicle_id("BUS001"),
        )
        .await
        .unwrap();

        let matches = app.find_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1.0);

        app.update_status(2, ReportStatus::from("claimed"))
            .await
            .unwrap();
        assert!(app.find_matches().await.unwrap().is_empty());
    }
}
