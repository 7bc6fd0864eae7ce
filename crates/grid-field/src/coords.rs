//! Grid coordinate descriptions.
//!
//! Weather grids arrive in one of two geometries. *Separable* grids carry a
//! single 1-D longitude axis shared by every row and a 1-D latitude axis
//! shared by every column, an implicit rectangular mesh. *Curvilinear*
//! grids (Lambert-conformal HRRR or RTMA output, for example) carry a full
//! 2-D coordinate pair per cell, not necessarily axis-aligned.
//! [`GridCoords`] unifies the two so downstream code can materialize a 2-D
//! mesh regardless of how the provider expressed the grid.

use ndarray::{Array1, Array2};

use crate::error::{FieldError, Result};

/// Coordinate description for a 2-D grid.
///
/// The row index is the slow axis (latitude) and the column index the fast
/// axis (longitude) throughout.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCoords {
    /// Implicit rectangular mesh from 1-D axes.
    Separable {
        /// Longitude per column.
        lon: Array1<f64>,
        /// Latitude per row.
        lat: Array1<f64>,
    },
    /// One coordinate pair per cell.
    Curvilinear {
        /// Longitude per cell.
        lon: Array2<f64>,
        /// Latitude per cell, same shape as `lon`.
        lat: Array2<f64>,
    },
}

impl GridCoords {
    /// Create a separable coordinate description from 1-D axes.
    pub fn separable(lon: impl Into<Array1<f64>>, lat: impl Into<Array1<f64>>) -> Self {
        Self::Separable {
            lon: lon.into(),
            lat: lat.into(),
        }
    }

    /// Create a curvilinear coordinate description.
    ///
    /// Fails with [`FieldError::CoordMismatch`] if the longitude and
    /// latitude grids have different shapes.
    pub fn curvilinear(lon: Array2<f64>, lat: Array2<f64>) -> Result<Self> {
        if lon.dim() != lat.dim() {
            return Err(FieldError::CoordMismatch {
                lon: lon.dim(),
                lat: lat.dim(),
            });
        }
        Ok(Self::Curvilinear { lon, lat })
    }

    /// Grid shape as `(rows, cols)` = `(latitude count, longitude count)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Separable { lon, lat } => (lat.len(), lon.len()),
            Self::Curvilinear { lon, .. } => lon.dim(),
        }
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        let (rows, cols) = self.shape();
        rows * cols
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize full 2-D longitude and latitude grids.
    ///
    /// Separable axes are broadcast into a rectangular mesh: longitude
    /// varies along columns, latitude along rows. Curvilinear grids are
    /// returned as-is. This gives every consumer a single code path.
    pub fn to_mesh(&self) -> (Array2<f64>, Array2<f64>) {
        match self {
            Self::Separable { lon, lat } => {
                let shape = (lat.len(), lon.len());
                let lon2 = Array2::from_shape_fn(shape, |(_, i)| lon[i]);
                let lat2 = Array2::from_shape_fn(shape, |(j, _)| lat[j]);
                (lon2, lat2)
            }
            Self::Curvilinear { lon, lat } => (lon.clone(), lat.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_separable_shape() {
        let coords = GridCoords::separable(vec![-100.0, -99.0, -98.0], vec![30.0, 31.0]);
        assert_eq!(coords.shape(), (2, 3));
        assert_eq!(coords.len(), 6);
        assert!(!coords.is_empty());
    }

    #[test]
    fn test_separable_to_mesh_broadcast() {
        let coords = GridCoords::separable(vec![-100.0, -99.0, -98.0], vec![30.0, 31.0]);
        let (lon2, lat2) = coords.to_mesh();

        assert_eq!(lon2.dim(), (2, 3));
        assert_eq!(lat2.dim(), (2, 3));
        // Longitude varies along columns: row 0 equals the axis.
        assert_eq!(lon2.row(0).to_vec(), vec![-100.0, -99.0, -98.0]);
        assert_eq!(lon2.row(1).to_vec(), vec![-100.0, -99.0, -98.0]);
        // Latitude varies along rows: column 0 equals the axis.
        assert_eq!(lat2.column(0).to_vec(), vec![30.0, 31.0]);
        assert_eq!(lat2.column(2).to_vec(), vec![30.0, 31.0]);
    }

    #[test]
    fn test_curvilinear_passthrough() {
        let lon = array![[-100.0, -99.0], [-100.1, -99.1]];
        let lat = array![[30.0, 30.0], [31.0, 31.0]];
        let coords = GridCoords::curvilinear(lon.clone(), lat.clone()).unwrap();

        assert_eq!(coords.shape(), (2, 2));
        let (lon2, lat2) = coords.to_mesh();
        assert_eq!(lon2, lon);
        assert_eq!(lat2, lat);
    }

    #[test]
    fn test_curvilinear_shape_mismatch() {
        let lon = Array2::zeros((2, 3));
        let lat = Array2::zeros((3, 2));
        let err = GridCoords::curvilinear(lon, lat).unwrap_err();
        assert!(matches!(
            err,
            FieldError::CoordMismatch {
                lon: (2, 3),
                lat: (3, 2)
            }
        ));
    }

    #[test]
    fn test_empty_grid() {
        let coords = GridCoords::separable(Vec::<f64>::new(), Vec::<f64>::new());
        assert_eq!(coords.shape(), (0, 0));
        assert!(coords.is_empty());
        let (lon2, lat2) = coords.to_mesh();
        assert_eq!(lon2.dim(), (0, 0));
        assert_eq!(lat2.dim(), (0, 0));
    }
}
