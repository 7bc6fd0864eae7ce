//! Fail-soft nearest-neighbor sampling of gridded fields.

use grid_field::GriddedField;

use crate::config::SamplerConfig;
use crate::geo::wrap180;
use crate::index::build_index;

/// Sample a field at arbitrary query coordinates.
///
/// Returns one value per query point, positionally aligned with the query
/// slices, using the nearest valid grid cell under Euclidean distance in
/// (lon, lat) degree space. Grid and query longitudes are both wrapped to
/// `[-180, 180)` first, so mixed conventions compare correctly.
///
/// `lons` and `lats` must be the same length. Degenerate grid data never
/// raises: if the value array cannot be broadcast to the coordinate shape,
/// or no cell has finite lon/lat/value, every output is NaN. Sparse grids
/// are an expected operating condition here, not an exception, and callers
/// should not have to special-case a mostly-empty field.
pub fn sample_nearest(
    field: &GriddedField,
    lons: &[f64],
    lats: &[f64],
    config: &SamplerConfig,
) -> Vec<f64> {
    debug_assert_eq!(lons.len(), lats.len());
    let n = lons.len();

    let (lon2, lat2) = field.coords.to_mesh();
    let shape = lon2.dim();

    let values = match field.values.broadcast(shape) {
        Some(v) => v,
        None => {
            tracing::warn!(
                values = ?field.values.dim(),
                coords = ?shape,
                "value shape cannot be broadcast to the coordinate grid, returning all missing"
            );
            return vec![f64::NAN; n];
        }
    };

    // Flatten valid cells into a point set the index can consume.
    let mut points = Vec::new();
    let mut cell_values = Vec::new();
    for ((j, i), &lon) in lon2.indexed_iter() {
        let lat = lat2[[j, i]];
        let value = values[[j, i]];
        if lon.is_finite() && lat.is_finite() && value.is_finite() {
            points.push([wrap180(lon), lat]);
            cell_values.push(value);
        }
    }

    if points.is_empty() {
        tracing::warn!(cells = lon2.len(), "no valid grid cells, returning all missing");
        return vec![f64::NAN; n];
    }

    let index = build_index(&points, config);
    tracing::debug!(
        valid = points.len(),
        cells = lon2.len(),
        queries = n,
        strategy = %config.strategy,
        "sampling field at query points"
    );

    (0..n)
        .map(|q| match lats.get(q) {
            Some(&lat) => index
                .nearest(wrap180(lons[q]), lat)
                .map(|i| cell_values[i])
                .unwrap_or(f64::NAN),
            None => f64::NAN,
        })
        .collect()
}
