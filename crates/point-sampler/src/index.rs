//! Nearest-neighbor index strategies.
//!
//! Two interchangeable implementations sit behind [`NearestIndex`]: a
//! KD-tree for `O(log n)` queries on large grids and an exhaustive scan
//! that is both the small-grid fast path and the reference the tree is
//! tested against. Both must return the same cell for every non-tied
//! query; exact-tie behavior is implementation-defined.

use kd_tree::KdTree2;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::config::SamplerConfig;

/// Nearest-neighbor lookup over a fixed set of 2-D points.
///
/// Points are (wrapped longitude, latitude) pairs; `nearest` returns the
/// position of the closest point in the set the index was built from,
/// under squared Euclidean distance in degree space.
pub trait NearestIndex {
    /// Index of the nearest point to `(lon, lat)`, or None for an empty set.
    fn nearest(&self, lon: f64, lat: f64) -> Option<usize>;

    /// Number of points in the index.
    fn len(&self) -> usize;

    /// Check if the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Balanced KD-tree index.
pub struct KdTreeIndex {
    tree: KdTree2<(usize, [f64; 2])>,
    len: usize,
}

impl KdTreeIndex {
    /// Build the tree over a point set, remembering each point's position.
    pub fn build(points: &[[f64; 2]]) -> Self {
        let items: Vec<(usize, [f64; 2])> = points.iter().copied().enumerate().collect();
        let len = items.len();
        let tree = KdTree2::build_by_key(items, |item, k| OrderedFloat(item.1[k]));
        Self { tree, len }
    }
}

impl NearestIndex for KdTreeIndex {
    fn nearest(&self, lon: f64, lat: f64) -> Option<usize> {
        self.tree
            .nearest_by(&[lon, lat], |item, k| item.1[k])
            .map(|found| found.item.0)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Exhaustive pairwise-distance index.
pub struct BruteForceIndex {
    points: Vec<[f64; 2]>,
}

impl BruteForceIndex {
    /// Copy the point set.
    pub fn build(points: &[[f64; 2]]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl NearestIndex for BruteForceIndex {
    fn nearest(&self, lon: f64, lat: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d2 = (p[0] - lon).powi(2) + (p[1] - lat).powi(2);
            match best {
                Some((_, best_d2)) if d2 >= best_d2 => {}
                _ => best = Some((i, d2)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

/// How to pick the nearest-neighbor implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Brute force at or below the configured point count, KD-tree above.
    #[default]
    Auto,
    /// Always build the KD-tree.
    KdTree,
    /// Always scan exhaustively.
    BruteForce,
}

impl SearchStrategy {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "kdtree" | "kd-tree" | "tree" => Self::KdTree,
            "brute" | "bruteforce" | "brute-force" => Self::BruteForce,
            _ => Self::Auto,
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::KdTree => write!(f, "kdtree"),
            Self::BruteForce => write!(f, "bruteforce"),
        }
    }
}

/// Build the index the configuration selects for this point set.
pub fn build_index(points: &[[f64; 2]], config: &SamplerConfig) -> Box<dyn NearestIndex> {
    let brute = match config.strategy {
        SearchStrategy::BruteForce => true,
        SearchStrategy::KdTree => false,
        SearchStrategy::Auto => points.len() <= config.brute_force_max_points,
    };
    if brute {
        Box::new(BruteForceIndex::build(points))
    } else {
        Box::new(KdTreeIndex::build(points))
    }
}
