//! Masked, scaled differencing of co-registered fields.

use ndarray::{Array2, Zip};

use crate::config::DiffConfig;
use crate::coords::GridCoords;
use crate::error::{FieldError, Result};
use crate::field::{FieldMetadata, GriddedField};

/// Scale for converting a Kelvin *difference* to a Fahrenheit difference.
///
/// A pure scale with no +32 offset: the offset cancels when subtracting two
/// absolute temperatures, so applying it here would corrupt every output.
pub const KELVIN_DIFF_TO_FAHRENHEIT: f64 = 9.0 / 5.0;

/// Compute `(a − b) × 9/5` under a physical-validity mask.
///
/// Both inputs must carry bitwise-identical coordinate descriptions; any
/// mismatch fails with [`FieldError::Alignment`] rather than being silently
/// realigned. A cell contributes a finite output only when both inputs are
/// finite and both lie strictly inside `config.valid_range`; every other
/// cell is NaN in the output. An entirely invalid input therefore yields an
/// entirely NaN field, not an error.
///
/// The output keeps the (common) coordinate description and derives its
/// metadata from the inputs, with units set to "degF".
pub fn field_difference(
    a: &GriddedField,
    b: &GriddedField,
    config: &DiffConfig,
) -> Result<GriddedField> {
    ensure_aligned(&a.coords, &b.coords)?;

    let shape = a.coords.shape();
    let av = a
        .values
        .broadcast(shape)
        .ok_or(FieldError::ShapeMismatch {
            values: a.values.dim(),
            coords: shape,
        })?;
    let bv = b
        .values
        .broadcast(shape)
        .ok_or(FieldError::ShapeMismatch {
            values: b.values.dim(),
            coords: shape,
        })?;

    let range = config.valid_range;
    let mut out = Array2::from_elem(shape, f64::NAN);
    Zip::from(&mut out).and(&av).and(&bv).for_each(|o, &x, &y| {
        if x.is_finite() && y.is_finite() && range.contains(x) && range.contains(y) {
            *o = (x - y) * KELVIN_DIFF_TO_FAHRENHEIT;
        }
    });

    let valid = out.iter().filter(|v| v.is_finite()).count();
    tracing::debug!(
        model_a = %a.metadata.model,
        model_b = %b.metadata.model,
        valid,
        total = out.len(),
        "computed difference field"
    );

    Ok(GriddedField {
        values: out,
        coords: a.coords.clone(),
        metadata: difference_metadata(&a.metadata, &b.metadata),
    })
}

/// Check that two coordinate descriptions are exactly equal.
fn ensure_aligned(a: &GridCoords, b: &GridCoords) -> Result<()> {
    if a == b {
        return Ok(());
    }
    Err(FieldError::alignment(describe_mismatch(a, b)))
}

fn describe_mismatch(a: &GridCoords, b: &GridCoords) -> String {
    match (a, b) {
        (GridCoords::Separable { .. }, GridCoords::Curvilinear { .. })
        | (GridCoords::Curvilinear { .. }, GridCoords::Separable { .. }) => {
            "separable vs curvilinear coordinate descriptions".to_string()
        }
        _ if a.shape() != b.shape() => {
            format!("grid shapes differ: {:?} vs {:?}", a.shape(), b.shape())
        }
        _ => "coordinate values differ along a shared axis".to_string(),
    }
}

fn difference_metadata(a: &FieldMetadata, b: &FieldMetadata) -> FieldMetadata {
    let model = if a.model.is_empty() || b.model.is_empty() {
        a.model.clone()
    } else {
        format!("{} - {}", a.model, b.model)
    };

    FieldMetadata {
        model,
        parameter: a.parameter.clone(),
        units: "degF".to_string(),
        reference_time: a.reference_time,
        forecast_hour: a.forecast_hour,
    }
}
