//! The NWP model registry.

use serde::Serialize;

use crate::error::{RegistryError, Result};

/// Provider-specific request parameters for one model.
///
/// These are the archive-request knobs: which model directory, which
/// product file, and for multi-domain ensembles which domain and member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestParams {
    /// Provider model identifier.
    pub model: &'static str,
    /// Provider product identifier.
    pub product: &'static str,
    /// Domain, for models published per-domain.
    pub domain: Option<&'static str>,
    /// Ensemble member, for models published per-member.
    pub member: Option<u32>,
}

/// One registry row: a canonical key, its accepted aliases, and the
/// request parameters the provider expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    /// Canonical registry key.
    pub key: &'static str,
    /// Accepted lowercase aliases (the canonical key always matches too).
    pub aliases: &'static [&'static str],
    /// Request parameters for the provider.
    pub request: RequestParams,
}

/// All models the comparator knows how to request.
pub const MODEL_REGISTRY: &[ModelEntry] = &[
    ModelEntry {
        key: "hrrr",
        aliases: &["hrrr"],
        request: RequestParams {
            model: "hrrr",
            product: "sfc",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "nam5k",
        aliases: &["nam5k", "nam-conusnest", "namnest", "nam hi-res nest"],
        request: RequestParams {
            model: "nam",
            product: "conusnest.hiresf",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "nam12k",
        aliases: &["nam12k", "nam-12km", "nam"],
        request: RequestParams {
            model: "nam",
            product: "awip12",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "nbm",
        aliases: &["nbm"],
        request: RequestParams {
            model: "nbm",
            product: "co",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "rap",
        aliases: &["rap"],
        request: RequestParams {
            model: "rap",
            product: "awp130pgrb",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "arw",
        aliases: &["arw", "ncar-arw"],
        request: RequestParams {
            model: "hiresw",
            product: "arw_5km",
            domain: Some("conus"),
            member: Some(2),
        },
    },
    ModelEntry {
        key: "fv3",
        aliases: &["fv3"],
        request: RequestParams {
            model: "hiresw",
            product: "fv3_5km",
            domain: Some("conus"),
            member: Some(1),
        },
    },
    ModelEntry {
        key: "href",
        aliases: &["href"],
        request: RequestParams {
            model: "href",
            product: "mean",
            domain: Some("conus"),
            member: None,
        },
    },
    ModelEntry {
        key: "gfs",
        aliases: &["gfs"],
        request: RequestParams {
            model: "gfs",
            product: "pgrb2.0p25",
            domain: None,
            member: None,
        },
    },
    ModelEntry {
        key: "rtma",
        aliases: &["rtma"],
        request: RequestParams {
            model: "rtma",
            product: "anl",
            domain: None,
            member: None,
        },
    },
];

/// Resolve user input to a registry entry.
///
/// Matching is case-insensitive and whitespace-trimmed; the canonical key
/// is checked before aliases.
pub fn resolve_model(user_text: &str) -> Result<&'static ModelEntry> {
    let key = user_text.trim().to_lowercase();

    if let Some(entry) = MODEL_REGISTRY.iter().find(|e| e.key == key) {
        return Ok(entry);
    }
    if let Some(entry) = MODEL_REGISTRY
        .iter()
        .find(|e| e.aliases.contains(&key.as_str()))
    {
        return Ok(entry);
    }

    Err(RegistryError::UnknownModel(user_text.to_string()))
}
