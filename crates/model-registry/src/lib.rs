//! Static registries mapping user-facing names to provider request
//! parameters.
//!
//! Forecasters type "namnest" or "2 meter temperature"; the archive
//! provider wants `model=nam, product=conusnest.hiresf` or a GRIB selector
//! string. These tables resolve the former to the latter. They are plain
//! immutable lookup data: alias resolution is a trim + lowercase + scan,
//! and unknown keys fail hard so a typo never silently fetches the wrong
//! model.
//!
//! The crate also carries the static reference table of major CONUS
//! airports used as sampling locations for the bias summary table.

pub mod error;
pub mod models;
pub mod stations;
pub mod variables;

// Re-export commonly used types at crate root
pub use error::{RegistryError, Result};
pub use models::{resolve_model, ModelEntry, RequestParams, MODEL_REGISTRY};
pub use stations::{major_airports, Station};
pub use variables::{pick_data_var, resolve_variable, VariableEntry, VAR_REGISTRY};
