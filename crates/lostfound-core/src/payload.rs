//! Block payloads: an opaque sorted map, plus the typed report entry.
//!
//! A [`Payload`] is what gets hashed. Keys are held in a `BTreeMap`, so the
//! iteration order, and therefore the canonical encoding, never depends on
//! insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::report::ReportKind;

/// Value of the `type` key on report-submission blocks.
pub const REPORT_EVENT_TYPE: &str = "report";

/// Payload keys written by a report submission.
pub mod keys {
    pub const TYPE: &str = "type";
    pub const REPORT_ID: &str = "report_id";
    pub const REPORT_TYPE: &str = "report_type";
    pub const ITEM_NAME: &str = "item_name";
    pub const VEHICLE_ID: &str = "vehicle_id";
    pub const TIMESTAMP: &str = "timestamp";
    pub const MESSAGE: &str = "message";

    pub const REPORT_KEYS: [&str; 6] =
        [TYPE, REPORT_ID, REPORT_TYPE, ITEM_NAME, VEHICLE_ID, TIMESTAMP];
}

/// A primitive payload value. There is no float variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PayloadValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PayloadValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PayloadValue::Null)
    }
}

impl From<&str> for PayloadValue {
    fn from(s: &str) -> Self {
        PayloadValue::Text(s.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        PayloadValue::Text(s)
    }
}

impl From<i64> for PayloadValue {
    fn from(n: i64) -> Self {
        PayloadValue::Int(n)
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        PayloadValue::Bool(b)
    }
}

impl<T: Into<PayloadValue>> From<Option<T>> for PayloadValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PayloadValue::Null, Into::into)
    }
}

/// The event data carried by a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, PayloadValue>);

impl Payload {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PayloadValue::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(PayloadValue::as_int)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PayloadValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this payload claims to be a report submission.
    pub fn is_report(&self) -> bool {
        self.get_str(keys::TYPE) == Some(REPORT_EVENT_TYPE)
    }

    /// The report id, if this is a report submission carrying one.
    pub fn report_id(&self) -> Option<i64> {
        if self.is_report() {
            self.get_int(keys::REPORT_ID)
        } else {
            None
        }
    }
}

impl<K: Into<String>, V: Into<PayloadValue>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Typed payload of a report-submission block.
///
/// The fixed fields are the submission contract; `extra` carries any
/// additional metadata without loosening the types of the fixed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub report_id: u64,
    pub report_type: ReportKind,
    pub item_name: Option<String>,
    pub vehicle_id: Option<String>,
    /// The report's own timestamp, echoed into the ledger.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, PayloadValue>,
}

impl ReportEntry {
    pub fn new(report_id: u64, report_type: ReportKind, timestamp: impl Into<String>) -> Self {
        Self {
            report_id,
            report_type,
            item_name: None,
            vehicle_id: None,
            timestamp: timestamp.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    pub fn vehicle_id(mut self, id: impl Into<String>) -> Self {
        self.vehicle_id = Some(id.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Lower into the payload that gets hashed.
    ///
    /// Fixed keys are written last so `extra` can never shadow them.
    pub fn to_payload(&self) -> Payload {
        let mut payload: Payload = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        // report ids beyond i64::MAX cannot come from a store that counts from 1
        let report_id = i64::try_from(self.report_id).unwrap_or(i64::MAX);
        payload.insert(keys::TYPE, REPORT_EVENT_TYPE);
        payload.insert(keys::REPORT_ID, report_id);
        payload.insert(keys::REPORT_TYPE, self.report_type.as_str());
        payload.insert(keys::ITEM_NAME, self.item_name.clone());
        payload.insert(keys::VEHICLE_ID, self.vehicle_id.clone());
        payload.insert(keys::TIMESTAMP, self.timestamp.clone());
        payload
    }

    /// Parse a raw payload against the report-submission contract.
    ///
    /// All six contract keys must be present. `item_name` and `vehicle_id`
    /// may be null; the rest must have their contract types.
    pub fn from_payload(payload: &Payload) -> Result<Self, CoreError> {
        for key in keys::REPORT_KEYS {
            if !payload.contains_key(key) {
                return Err(CoreError::MalformedPayload(format!("missing key {key:?}")));
            }
        }
        if !payload.is_report() {
            return Err(CoreError::MalformedPayload(format!(
                "{:?} must be {REPORT_EVENT_TYPE:?}",
                keys::TYPE
            )));
        }

        let report_id = payload
            .get_int(keys::REPORT_ID)
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| {
                CoreError::MalformedPayload("report_id must be a non-negative integer".into())
            })?;

        let report_type = payload
            .get_str(keys::REPORT_TYPE)
            .ok_or_else(|| CoreError::MalformedPayload("report_type must be a string".into()))?
            .parse::<ReportKind>()
            .map_err(|e| CoreError::MalformedPayload(e.to_string()))?;

        let item_name = optional_text(payload, keys::ITEM_NAME)?;
        let vehicle_id = optional_text(payload, keys::VEHICLE_ID)?;

        let timestamp = payload
            .get_str(keys::TIMESTAMP)
            .ok_or_else(|| CoreError::MalformedPayload("timestamp must be a string".into()))?
            .to_string();

        let extra = payload
            .iter()
            .filter(|(k, _)| !keys::REPORT_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            report_id,
            report_type,
            item_name,
            vehicle_id,
            timestamp,
            extra,
        })
    }
}

impl From<ReportEntry> for Payload {
    fn from(entry: ReportEntry) -> Self {
        entry.to_payload()
    }
}

fn optional_text(payload: &Payload, key: &str) -> Result<Option<String>, CoreError> {
    match payload.get(key) {
        Some(PayloadValue::Text(s)) => Ok(Some(s.clone())),
        Some(PayloadValue::Null) | None => Ok(None),
        Some(other) => Err(CoreError::MalformedPayload(format!(
            "{key} must be a string or null, got {other:?}"
        ))),
    }
}
