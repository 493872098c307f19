//! Top-level configuration, loadable from TOML.
//!
//! ```toml
//! [ledger]
//! genesis_message = "Genesis Block for Lost & Found System"
//!
//! [matcher]
//! name_weight = 50
//! location_weight = 30
//! vehicle_weight = 20
//! threshold = 50
//! absent_vehicle = "count_as_match"
//! ```
//!
//! Every key is optional. Missing keys take the values shown above.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lostfound_ledger::LedgerConfig;
use lostfound_matcher::MatchConfig;

use crate::error::{LostFoundError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LostFoundConfig {
    pub ledger: LedgerConfig,
    pub matcher: MatchConfig,
}

impl LostFoundConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LostFoundError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
