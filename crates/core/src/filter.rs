//! Critical-reading filter.

use crate::reading::Reading;

/// Temperature above which a reading counts as critical, in Celsius.
pub const CRITICAL_TEMP_THRESHOLD: f64 = 50.0;

/// Retain readings whose temperature is strictly above `threshold`.
///
/// Readings with no numeric temperature never match.
pub fn filter_critical(readings: &[Reading], threshold: f64) -> Vec<Reading> {
    readings
        .iter()
        .filter(|r| r.temp_c.is_some_and(|t| t > threshold))
        .cloned()
        .collect()
}
