//! Lost and found reports as held by a report store.
//!
//! Reports live outside the ledger. The ledger only records a derived
//! [`ReportEntry`](crate::payload::ReportEntry) per submission; the matcher
//! reads reports directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::CoreError;
use crate::payload::ReportEntry;

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Lost => "lost",
            ReportKind::Found => "found",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ReportKind::Lost),
            "found" => Ok(ReportKind::Found),
            other => Err(CoreError::UnknownReportKind(other.to_string())),
        }
    }
}

/// Review status of a report.
///
/// New reports are `Pending`. Admins may set any other status string; only
/// pending reports take part in matching.
///
/// Equality, hashing and [`is_pending`](Self::is_pending) go through the
/// string form, so `Other("pending")` behaves exactly like `Pending`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Pending,
    Other(String),
}

impl ReportStatus {
    pub const PENDING: &'static str = "pending";

    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Pending => Self::PENDING,
            ReportStatus::Other(s) => s,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.as_str() == Self::PENDING
    }
}

impl PartialEq for ReportStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ReportStatus {}

impl Hash for ReportStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for ReportStatus {
    fn from(s: String) -> Self {
        if s == Self::PENDING {
            ReportStatus::Pending
        } else {
            ReportStatus::Other(s)
        }
    }
}

impl From<&str> for ReportStatus {
    fn from(s: &str) -> Self {
        ReportStatus::from(s.to_string())
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Pending => ReportStatus::PENDING.to_string(),
            ReportStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub item_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub contact_info: String,
}

impl NewReport {
    pub fn new(kind: ReportKind, item_name: impl Into<String>) -> Self {
        Self {
            kind,
            item_name: Some(item_name.into()),
            description: None,
            location: None,
            vehicle_id: None,
            contact_info: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn vehicle_id(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn contact_info(mut self, contact: impl Into<String>) -> Self {
        self.contact_info = contact.into();
        self
    }
}

/// A stored report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub vehicle_id: Option<String>,
    pub contact_info: String,
    pub status: ReportStatus,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "timestamp")]
    pub created_at: String,
}

impl Report {
    /// Materialize a submission with a store-assigned id.
    pub fn from_new(id: u64, new: NewReport, created_at: impl Into<String>) -> Self {
        Self {
            id,
            kind: new.kind,
            item_name: new.item_name,
            description: new.description,
            location: new.location,
            vehicle_id: new.vehicle_id,
            contact_info: new.contact_info,
            status: ReportStatus::Pending,
            created_at: created_at.into(),
        }
    }

    pub fn is_lost(&self) -> bool {
        self.kind == ReportKind::Lost
    }

    pub fn is_found(&self) -> bool {
        self.kind == ReportKind::Found
    }

    /// The ledger entry recorded for this report's submission.
    pub fn ledger_entry(&self) -> ReportEntry {
        ReportEntry {
            report_id: self.id,
            report_type: self.kind,
            item_name: self.item_name.clone(),
            vehicle_id: self.vehicle_id.clone(),
            timestamp: self.created_at.clone(),
            extra: Default::default(),
        }
    }
}
