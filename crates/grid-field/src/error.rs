//! Error types for gridded-field operations.

use thiserror::Error;

/// Errors that can occur when constructing or differencing gridded fields.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The two grids do not carry identical coordinates.
    #[error("grids are not exactly aligned: {0}")]
    Alignment(String),

    /// A value array cannot be broadcast to the coordinate shape.
    #[error("value shape {values:?} does not fit coordinate shape {coords:?}")]
    ShapeMismatch {
        values: (usize, usize),
        coords: (usize, usize),
    },

    /// The longitude and latitude grids of a curvilinear description disagree.
    #[error("longitude grid shape {lon:?} does not match latitude grid shape {lat:?}")]
    CoordMismatch {
        lon: (usize, usize),
        lat: (usize, usize),
    },
}

impl FieldError {
    /// Create an Alignment error.
    pub fn alignment(msg: impl Into<String>) -> Self {
        Self::Alignment(msg.into())
    }
}

/// Result type for gridded-field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
