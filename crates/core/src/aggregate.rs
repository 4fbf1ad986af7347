//! Per-sensor aggregation.
//!
//! Pure logic -- the caller loads the dataset and passes the rows in.
//! Groups readings by `sensor_id` and reduces each group to summary
//! statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::reading::Reading;

/// Summary statistics for one sensor's readings.
///
/// `avg_temp` and `max_pressure` are `None` when the group has no numeric
/// value for that field; `reading_count` always counts every row in the
/// group, including rows with absent numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorAggregate {
    pub sensor_id: String,
    pub avg_temp: Option<f64>,
    pub max_pressure: Option<f64>,
    pub reading_count: usize,
}

/// Running totals for one group while aggregating.
#[derive(Default)]
struct GroupAccumulator {
    temp_sum: f64,
    temp_count: usize,
    max_pressure: Option<f64>,
    reading_count: usize,
}

impl GroupAccumulator {
    fn push(&mut self, reading: &Reading) {
        self.reading_count += 1;
        if let Some(temp) = reading.temp_c {
            self.temp_sum += temp;
            self.temp_count += 1;
        }
        if let Some(pressure) = reading.pressure_psi {
            self.max_pressure = Some(match self.max_pressure {
                Some(current) => current.max(pressure),
                None => pressure,
            });
        }
    }

    fn finish(self, sensor_id: String) -> SensorAggregate {
        let avg_temp = (self.temp_count > 0).then(|| self.temp_sum / self.temp_count as f64);
        SensorAggregate {
            sensor_id,
            avg_temp,
            max_pressure: self.max_pressure,
            reading_count: self.reading_count,
        }
    }
}

/// Group readings by `sensor_id` and compute per-group statistics.
///
/// Each distinct `sensor_id` appears exactly once in the output; groups are
/// emitted in ascending `sensor_id` order, not input order.
pub fn aggregate(readings: &[Reading]) -> Vec<SensorAggregate> {
    let mut groups: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();

    for reading in readings {
        groups
            .entry(reading.sensor_id.as_str())
            .or_default()
            .push(reading);
    }

    groups
        .into_iter()
        .map(|(sensor_id, acc)| acc.finish(sensor_id.to_string()))
        .collect()
}
