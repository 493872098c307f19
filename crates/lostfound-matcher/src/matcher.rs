//! Candidate generation over a set of reports.

use serde::Serialize;
use tracing::debug;

use lostfound_core::Report;

use crate::config::{AbsentVehiclePolicy, MatchConfig};

/// A lost/found pair that scored above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub lost: Report,
    pub found: Report,
    /// Points divided by 100, so at most two decimals.
    pub score: f64,
}

/// Stateless scorer for lost/found pairs.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score every pending lost report against every pending found report.
    ///
    /// Output order follows input order: lost reports outer, found inner.
    pub fn find_matches(&self, reports: &[Report]) -> Vec<MatchCandidate> {
        let (lost, found): (Vec<&Report>, Vec<&Report>) = reports
            .iter()
            .filter(|r| r.status.is_pending())
            .partition(|r| r.is_lost());

        let mut candidates = Vec::new();
        for l in &lost {
            for f in &found {
                let points = self.points(l, f);
                if points > self.config.threshold {
                    candidates.push(MatchCandidate {
                        lost: (*l).clone(),
                        found: (*f).clone(),
                        score: f64::from(points) / 100.0,
                    });
                }
            }
        }

        debug!(
            lost = lost.len(),
            found = found.len(),
            candidates = candidates.len(),
            "computed matches"
        );
        candidates
    }

    /// Score one pair, in hundredths. Ignores status and kind.
    ///
    /// Saturates at `u32::MAX` rather than wrapping on oversized weights.
    pub fn points(&self, lost: &Report, found: &Report) -> u32 {
        let mut points: u32 = 0;
        if same_text(&lost.item_name, &found.item_name) {
            points = points.saturating_add(self.config.name_weight);
        }
        if same_text(&lost.location, &found.location) {
            points = points.saturating_add(self.config.location_weight);
        }
        if self.same_vehicle(&lost.vehicle_id, &found.vehicle_id) {
            points = points.saturating_add(self.config.vehicle_weight);
        }
        points
    }

    fn same_vehicle(&self, a: &Option<String>, b: &Option<String>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.config.absent_vehicle == AbsentVehiclePolicy::CountAsMatch,
            _ => false,
        }
    }
}

/// Both present, non-empty and equal ignoring case.
fn same_text(a: &Option<String>, b: &Option<String>) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            a.to_lowercase() == b.to_lowercase()
        }
        _ => false,
    }
}
