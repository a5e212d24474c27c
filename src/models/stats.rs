//! Statistics endpoint payload.

use serde::{Serialize, Serializer};

pub const API_NAME: &str = "AIMod API";
pub const API_VERSION: &str = "0.0.1";

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Row totals read from the database at request time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub guilds: i64,
    pub warnings: i64,
}

/// Body of `GET /api`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub name: &'static str,
    pub version: &'static str,
    pub stats: UsageStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageStats {
    pub guilds: i64,
    pub warnings: i64,
    #[serde(serialize_with = "serialize_js_number")]
    pub average_warnings_per_guild: f64,
}

/// Serialize an f64 the way a JavaScript JSON encoder does: integral values lose
/// their fractional part, non-finite values become `null`.
pub fn serialize_js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}
