//! Matcher weights and thresholds.

use serde::{Deserialize, Serialize};

/// How to score a pair where neither report names a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentVehiclePolicy {
    /// Two missing vehicle ids compare equal and earn the vehicle points.
    #[default]
    CountAsMatch,
    /// Vehicle points need a vehicle id on both sides.
    Ignore,
}

/// Scoring configuration. All weights are in hundredths of a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub name_weight: u32,
    pub location_weight: u32,
    pub vehicle_weight: u32,
    /// Pairs must score strictly above this.
    pub threshold: u32,
    pub absent_vehicle: AbsentVehiclePolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            name_weight: 50,
            location_weight: 30,
            vehicle_weight: 20,
            threshold: 50,
            absent_vehicle: AbsentVehiclePolicy::CountAsMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MatchConfig =
            toml::from_str("threshold = 70\nabsent_vehicle = \"ignore\"").unwrap();
        assert_eq!(config.threshold, 70);
        assert_eq!(config.absent_vehicle, AbsentVehiclePolicy::Ignore);
        assert_eq!(config.name_weight, 50);
        assert_eq!(config.vehicle_weight, 20);
    }
}
