//! Nearest-neighbor point sampling on weather grids.
//!
//! Given a [`grid_field::GriddedField`] on its native mesh (separable 1-D
//! axes or a full curvilinear grid) and a list of query lon/lat pairs,
//! [`sample_nearest`] returns one value per query point: the value of the
//! nearest valid grid cell under plain Euclidean distance in (lon, lat)
//! degree space.
//!
//! The pipeline is:
//!
//! ```text
//! queries ─┐
//!          ▼
//! wrap180 normalization (grid AND query longitudes)
//!          │
//!          ▼
//! mesh materialization (1-D axes → 2-D grids, curvilinear as-is)
//!          │
//!          ▼
//! validity filtering (drop non-finite lon/lat/value cells)
//!          │
//!          ▼
//! nearest-neighbor index (KD-tree, or brute force for small grids)
//!          │
//!          ▼
//! one value per query point (NaN where nothing valid exists)
//! ```
//!
//! In contrast to the fail-hard differencer in `grid-field`, sampling is
//! fail-soft: sparse or entirely invalid grids are an expected operating
//! condition, so degenerate inputs degrade to NaN results and never panic
//! or return an error.

pub mod config;
pub mod geo;
pub mod index;
pub mod sampler;

// Re-export commonly used types at crate root
pub use config::SamplerConfig;
pub use geo::wrap180;
pub use index::{build_index, BruteForceIndex, KdTreeIndex, NearestIndex, SearchStrategy};
pub use sampler::sample_nearest;
