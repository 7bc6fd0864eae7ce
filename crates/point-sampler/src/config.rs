//! Configuration for the point sampler.

use serde::{Deserialize, Serialize};

use crate::index::SearchStrategy;

/// Configuration for nearest-neighbor sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Which nearest-neighbor implementation to use.
    pub strategy: SearchStrategy,

    /// With [`SearchStrategy::Auto`], grids with at most this many valid
    /// cells are scanned exhaustively instead of paying tree construction.
    pub brute_force_max_points: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Auto,
            brute_force_max_points: 4096,
        }
    }
}

impl SamplerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("SAMPLER_SEARCH_STRATEGY") {
            config.strategy = SearchStrategy::from_str(&val);
        }

        if let Ok(val) = std::env::var("SAMPLER_BRUTE_FORCE_MAX_POINTS") {
            if let Ok(n) = val.parse() {
                config.brute_force_max_points = n;
            }
        }

        config
    }

    /// Force the KD-tree path.
    pub fn kd_tree() -> Self {
        Self {
            strategy: SearchStrategy::KdTree,
            ..Self::default()
        }
    }

    /// Force the brute-force path.
    pub fn brute_force() -> Self {
        Self {
            strategy: SearchStrategy::BruteForce,
            ..Self::default()
        }
    }
}
