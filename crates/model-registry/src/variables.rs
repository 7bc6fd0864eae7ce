//! The analysis-variable registry.

use serde::Serialize;

use crate::error::{RegistryError, Result};

/// One variable the comparator can audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableEntry {
    /// Canonical registry key (GRIB short name).
    pub key: &'static str,
    /// Provider selector string for this variable.
    pub selector: &'static str,
    /// Accepted lowercase aliases.
    pub aliases: &'static [&'static str],
    /// Dataset variable names this may decode to, in preference order.
    pub ds_candidates: &'static [&'static str],
    /// Expected physical units.
    pub units_hint: &'static str,
    /// Display title.
    pub title: &'static str,
}

/// All variables the comparator knows how to request.
pub const VAR_REGISTRY: &[VariableEntry] = &[
    VariableEntry {
        key: "TMP",
        selector: "TMP:2 m above",
        aliases: &["2 meter temperature", "t2m", "temperature", "tmp"],
        ds_candidates: &["t2m", "tmp2m", "temperature"],
        units_hint: "K",
        title: "2 Meter Temperature",
    },
    VariableEntry {
        key: "DPT",
        selector: "DPT:2 m above",
        aliases: &["2 meter dew point", "dewpoint", "dpt"],
        ds_candidates: &["dpt2m", "dpt", "dewpoint"],
        units_hint: "K",
        title: "2 Meter Dew Point",
    },
];

/// Resolve user input to a variable entry.
///
/// Matching is case-insensitive and whitespace-trimmed, against the
/// canonical key and then the alias list.
pub fn resolve_variable(user_text: &str) -> Result<&'static VariableEntry> {
    let key = user_text.trim().to_lowercase();

    for entry in VAR_REGISTRY {
        if key == entry.key.to_lowercase() || entry.aliases.contains(&key.as_str()) {
            return Ok(entry);
        }
    }

    Err(RegistryError::UnknownVariable(user_text.to_string()))
}

/// Pick the dataset variable name matching a registry key.
///
/// Decoders name the same physical variable inconsistently, so selection
/// is layered: a single available variable is taken as-is, then candidate
/// names are tried for an exact hit, then as substrings.
pub fn pick_data_var(available: &[&str], var_key: &str) -> Result<String> {
    if available.len() == 1 {
        return Ok(available[0].to_string());
    }

    let candidates = VAR_REGISTRY
        .iter()
        .find(|e| e.key == var_key)
        .map(|e| e.ds_candidates)
        .unwrap_or(&[]);

    for cand in candidates {
        if let Some(name) = available.iter().find(|a| *a == cand) {
            return Ok(name.to_string());
        }
    }

    // Substring fallback helps with odd decoder naming like "t2m_surface".
    for cand in candidates {
        if let Some(name) = available.iter().find(|a| a.contains(cand)) {
            return Ok(name.to_string());
        }
    }

    Err(RegistryError::AmbiguousVariable {
        key: var_key.to_string(),
        available: available.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_or_alias() {
        assert_eq!(resolve_variable("TMP").unwrap().key, "TMP");
        assert_eq!(resolve_variable("tmp").unwrap().key, "TMP");
        assert_eq!(resolve_variable("temperature").unwrap().key, "TMP");
        assert_eq!(resolve_variable("dewpoint").unwrap().key, "DPT");
    }

    #[test]
    fn test_unknown_variable_fails() {
        let err = resolve_variable("wind_speed").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownVariable("wind_speed".to_string())
        );
    }

    #[test]
    fn test_pick_single_var_short_circuits() {
        assert_eq!(pick_data_var(&["weird_name"], "TMP").unwrap(), "weird_name");
    }

    #[test]
    fn test_pick_candidate_exact_match() {
        assert_eq!(
            pick_data_var(&["something_else", "t2m"], "TMP").unwrap(),
            "t2m"
        );
    }

    #[test]
    fn test_pick_candidate_substring_match() {
        assert_eq!(
            pick_data_var(&["foo", "t2m_surface"], "TMP").unwrap(),
            "t2m_surface"
        );
    }

    #[test]
    fn test_pick_fails_when_nothing_matches() {
        let err = pick_data_var(&["foo", "bar"], "TMP").unwrap_err();
        assert!(matches!(err, RegistryError::AmbiguousVariable { .. }));
    }

    #[test]
    fn test_selector_strings() {
        assert_eq!(resolve_variable("tmp").unwrap().selector, "TMP:2 m above");
        assert_eq!(resolve_variable("dpt").unwrap().selector, "DPT:2 m above");
    }
}
