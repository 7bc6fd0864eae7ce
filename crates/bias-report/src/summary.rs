//! Whole-field summaries.

use grid_field::{mean_absolute_error, mean_bias, GriddedField};
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a difference field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Mean of the finite cells (positive = model warm bias).
    pub bias: f64,
    /// Mean absolute value of the finite cells.
    pub mae: f64,
    /// Number of finite cells.
    pub valid_cells: usize,
    /// Total cell count, masked cells included.
    pub total_cells: usize,
}

/// Summarize a difference field.
pub fn summarize(field: &GriddedField) -> FieldSummary {
    let summary = FieldSummary {
        bias: mean_bias(field),
        mae: mean_absolute_error(field),
        valid_cells: field.valid_cells(),
        total_cells: field.len(),
    };
    tracing::debug!(
        bias = summary.bias,
        mae = summary.mae,
        valid = summary.valid_cells,
        total = summary.total_cells,
        "summarized difference field"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_field::GridCoords;
    use ndarray::array;

    #[test]
    fn test_summary_counts_and_stats() {
        let field = GriddedField::new(
            array![[0.5, 0.5], [0.5, f64::NAN]],
            GridCoords::separable(vec![-100.0, -99.0], vec![30.0, 31.0]),
        );
        let summary = summarize(&field);
        assert!((summary.bias - 0.5).abs() < 1e-12);
        assert!((summary.mae - 0.5).abs() < 1e-12);
        assert_eq!(summary.valid_cells, 3);
        assert_eq!(summary.total_cells, 4);
    }

    #[test]
    fn test_summary_of_all_masked_field() {
        let field = GriddedField::new(
            array![[f64::NAN, f64::NAN]],
            GridCoords::separable(vec![-100.0, -99.0], vec![30.0]),
        );
        let summary = summarize(&field);
        assert!(summary.bias.is_nan());
        assert!(summary.mae.is_nan());
        assert_eq!(summary.valid_cells, 0);
        assert_eq!(summary.total_cells, 2);
    }
}
