//! Summary statistics over difference fields.
//!
//! NaN cells are masked cells, so both statistics skip them rather than
//! poisoning the aggregate. A field with no finite cells yields NaN.

use crate::field::GriddedField;

/// Mean of the field's finite values (the mean bias of a difference field).
pub fn mean_bias(field: &GriddedField) -> f64 {
    nan_mean(field.values.iter().copied())
}

/// Mean of the absolute finite values (the mean absolute error of a
/// difference field).
pub fn mean_absolute_error(field: &GriddedField) -> f64 {
    nan_mean(field.values.iter().map(|v| v.abs()))
}

fn nan_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut total = 0.0;
    let mut count = 0u64;
    for v in values {
        if v.is_finite() {
            total += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        total / count as f64
    }
}
