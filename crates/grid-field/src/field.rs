//! Gridded scalar fields and their metadata.

use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::coords::GridCoords;

/// Descriptive metadata attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Model identifier (e.g., "hrrr", "rtma").
    pub model: String,
    /// Parameter name (e.g., "TMP").
    pub parameter: String,
    /// Physical units (e.g., "K").
    pub units: String,
    /// Reference time (model run time), if known.
    pub reference_time: Option<DateTime<Utc>>,
    /// Forecast hour, if this is a forecast field.
    pub forecast_hour: Option<u32>,
}

impl FieldMetadata {
    /// Create metadata for a model parameter.
    pub fn new(model: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            parameter: parameter.into(),
            ..Self::default()
        }
    }

    /// Set the physical units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set the reference (run) time.
    pub fn with_reference_time(mut self, time: DateTime<Utc>) -> Self {
        self.reference_time = Some(time);
        self
    }

    /// Set the forecast hour.
    pub fn with_forecast_hour(mut self, hour: u32) -> Self {
        self.forecast_hour = Some(hour);
        self
    }
}

/// A scalar value per grid cell plus the coordinate description of the grid.
///
/// Fields are never mutated in place; every transform yields a new field.
/// The value array usually matches the coordinate shape exactly. Consumers
/// that tolerate merely-broadcastable values (the point sampler) handle the
/// mismatch themselves; construction does not reject it.
#[derive(Debug, Clone)]
pub struct GriddedField {
    /// Cell values, row-major with latitude as the slow axis.
    pub values: Array2<f64>,
    /// Coordinate description of the grid.
    pub coords: GridCoords,
    /// Descriptive metadata.
    pub metadata: FieldMetadata,
}

impl GriddedField {
    /// Create a field with default (empty) metadata.
    pub fn new(values: Array2<f64>, coords: GridCoords) -> Self {
        Self {
            values,
            coords,
            metadata: FieldMetadata::default(),
        }
    }

    /// Attach metadata to the field.
    pub fn with_metadata(mut self, metadata: FieldMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Total number of value cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the field holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells carrying a finite value.
    pub fn valid_cells(&self) -> usize {
        self.values.iter().filter(|v| v.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ndarray::array;

    #[test]
    fn test_metadata_builder() {
        let run = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let meta = FieldMetadata::new("hrrr", "TMP")
            .with_units("K")
            .with_reference_time(run)
            .with_forecast_hour(6);

        assert_eq!(meta.model, "hrrr");
        assert_eq!(meta.parameter, "TMP");
        assert_eq!(meta.units, "K");
        assert_eq!(meta.reference_time, Some(run));
        assert_eq!(meta.forecast_hour, Some(6));
    }

    #[test]
    fn test_valid_cells() {
        let coords = GridCoords::separable(vec![-100.0, -99.0], vec![30.0, 31.0]);
        let field = GriddedField::new(array![[1.0, f64::NAN], [f64::INFINITY, 4.0]], coords);

        assert_eq!(field.len(), 4);
        assert_eq!(field.valid_cells(), 2);
    }

    #[test]
    fn test_metadata_serde_round_trip() {
        let meta = FieldMetadata::new("rtma", "DPT").with_units("K");
        let json = serde_json::to_string(&meta).unwrap();
        let back: FieldMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
