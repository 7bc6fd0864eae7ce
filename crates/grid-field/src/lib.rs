//! Labeled gridded scalar fields for forecast verification.
//!
//! A [`GriddedField`] pairs a 2-D value array with the coordinate
//! description of its grid (separable 1-D axes or a full curvilinear mesh)
//! and a small metadata record. The algorithmic core of the crate is
//! [`field_difference`], which subtracts two co-registered Kelvin fields
//! under a physical-validity mask and scales the result to a Fahrenheit
//! difference.
//!
//! Two deliberately different policies live side by side:
//!
//! - **Alignment is fail-hard.** Differencing two fields whose coordinates
//!   are not bitwise identical fails with [`FieldError::Alignment`]; the
//!   mismatch is never repaired by interpolation or dropping cells.
//! - **Masking is fail-soft.** Non-finite or physically implausible cells
//!   become NaN in the output, never an error; an entirely invalid input
//!   simply yields an entirely NaN output.
//!
//! # Example
//!
//! ```
//! use grid_field::{field_difference, DiffConfig, GridCoords, GriddedField};
//! use ndarray::array;
//!
//! let coords = GridCoords::separable(vec![-100.0, -99.0], vec![30.0, 31.0]);
//! let forecast = GriddedField::new(array![[300.0, 301.0], [302.0, 303.0]], coords.clone());
//! let analysis = GriddedField::new(array![[299.0, 300.0], [301.0, 302.0]], coords);
//!
//! let diff = field_difference(&forecast, &analysis, &DiffConfig::default()).unwrap();
//! assert!((diff.values[[0, 0]] - 1.8).abs() < 1e-12);
//! ```

pub mod config;
pub mod coords;
pub mod diff;
pub mod error;
pub mod field;
pub mod stats;

// Re-export commonly used types at crate root
pub use config::{DiffConfig, ValidRange};
pub use coords::GridCoords;
pub use diff::{field_difference, KELVIN_DIFF_TO_FAHRENHEIT};
pub use error::{FieldError, Result};
pub use field::{FieldMetadata, GriddedField};
pub use stats::{mean_absolute_error, mean_bias};
