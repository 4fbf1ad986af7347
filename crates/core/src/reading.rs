//! The `Reading` record: one sensor sample.
//!
//! Field order matters: the cleaner serializes readings straight to CSV, and
//! the header row must match the input record's field order
//! (`sensor_id`, `temp_c`, `pressure_psi`).

use serde::{Deserialize, Deserializer, Serialize};

/// One sensor sample from the raw JSON dataset.
///
/// `sensor_id` is required; a record without it fails deserialization.
/// The numeric fields are lenient: a missing or non-numeric value becomes
/// `None`, which the aggregator excludes from mean/max while still counting
/// the row in `reading_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sensor_id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temp_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pressure_psi: Option<f64>,
}

/// Deserialize any JSON value, keeping it only if it is a number.
///
/// Strings, booleans, nulls, and nested structures all coerce to `None`
/// rather than failing the whole load.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
