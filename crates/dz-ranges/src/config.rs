//! Business-trip configuration (`scConfig` in the persisted document).

use dz_core::Amount;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Daily allowance per elapsed-hours bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerDiemRates {
    /// More than 5 and at most 12 hours.
    #[serde(rename = "rate5to12")]
    pub rate_5_to_12: Amount,
    /// More than 12 and at most 18 hours.
    #[serde(rename = "rate12to18")]
    pub rate_12_to_18: Amount,
    /// More than 18 hours.
    #[serde(rename = "rateOver18")]
    pub rate_over_18: Amount,
}

impl Default for PerDiemRates {
    fn default() -> Self {
        Self {
            rate_5_to_12: 9.30,
            rate_12_to_18: 13.90,
            rate_over_18: 20.60,
        }
    }
}

/// Defaults for proposed trips and the per-diem table.
///
/// Missing fields fall back to their defaults.  Fields this crate does not use
/// (addresses, vehicle, purpose, ...) are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripConfig {
    /// Departure time given to proposed trips.
    pub default_start_time: String,
    /// Distance given to proposed trips.
    pub default_km: u32,
    /// Per-diem tier table.
    pub per_diem: PerDiemRates,
    /// Unrecognised fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            default_start_time: "04:30".to_string(),
            default_km: 370,
            per_diem: PerDiemRates::default(),
            extra: Map::new(),
        }
    }
}
