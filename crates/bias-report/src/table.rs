//! Per-station delta tables.

use grid_field::GriddedField;
use model_registry::Station;
use point_sampler::{sample_nearest, SamplerConfig};
use serde::{Deserialize, Serialize};

/// One row of the station table: a station and its sampled delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDelta {
    /// Station identifier (e.g., "KDEN").
    pub id: String,
    /// Station name.
    pub name: String,
    /// Sampled value; NaN where the grid had nothing valid nearby.
    pub value: f64,
}

/// Sample a field at every station, preserving station order.
///
/// Inherits the sampler's fail-soft contract: stations over an invalid or
/// degenerate grid get NaN, never an error.
pub fn station_deltas(
    field: &GriddedField,
    stations: &[Station],
    config: &SamplerConfig,
) -> Vec<StationDelta> {
    let lons: Vec<f64> = stations.iter().map(|s| s.lon).collect();
    let lats: Vec<f64> = stations.iter().map(|s| s.lat).collect();
    let values = sample_nearest(field, &lons, &lats, config);

    stations
        .iter()
        .zip(values)
        .map(|(station, value)| StationDelta {
            id: station.id.clone(),
            name: station.name.clone(),
            value,
        })
        .collect()
}

/// Assemble the display table: stable-sort by station id ascending, round
/// values to one decimal, keep at most `max_rows` rows.
pub fn delta_table(mut rows: Vec<StationDelta>, max_rows: usize) -> Vec<StationDelta> {
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    rows.truncate(max_rows);
    for row in &mut rows {
        row.value = round1(row.value);
    }
    rows
}

/// Round to one decimal place, passing NaN through.
fn round1(value: f64) -> f64 {
    if value.is_finite() {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}
