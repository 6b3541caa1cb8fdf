//! TypeKey → type identifier resolution.
//!
//! Curated lookups come first; DLC/patch variants absent from the table are
//! inferred from their base entry when — and only when — the shortened name
//! pins down exactly one distinct candidate. Ambiguity stays unresolved and
//! becomes fatal during aggregation.

use fmgcat_core::TypeKey;

use crate::keys::KeyTable;

/// DLC/patch suffixes recognized on FMG names and type identifiers. The
/// lowercase `_dlc01`/`_dlc02` forms are the Elden Ring family's spelling and
/// rewrite to the canonical `_DLC1`/`_DLC2`.
pub const SUFFIXES: &[&str] = &["_DLC1", "_DLC2", "_Patch", "_dlc01", "_dlc02"];

/// The canonical form of a recognized suffix.
fn canonical_suffix(suffix: &str) -> &str {
    match suffix {
        "_dlc01" => "_DLC1",
        "_dlc02" => "_DLC2",
        other => other,
    }
}

/// Resolve a TypeKey to its canonical type identifier.
///
/// Pure with respect to the table: the same key always yields the same
/// result. Returns `None` when the key is neither curated nor confidently
/// inferable.
pub fn resolve(table: &KeyTable, key: &TypeKey) -> Option<String> {
    if let Some(type_id) = table.get(key) {
        return Some(type_id.to_string());
    }
    for suffix in SUFFIXES {
        // FMG names use lowercase suffixes even where the type id does not.
        if !key.name.ends_with(&suffix.to_lowercase()) {
            continue;
        }
        let short_name = &key.name[..key.name.len() - suffix.len()];
        let mut candidates: Vec<&str> = table
            .types_for_name(short_name)
            .iter()
            .map(String::as_str)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();
        // Inference only fires for a single distinct candidate; zero or
        // several means we would be guessing.
        if let [only] = candidates.as_slice() {
            return Some(format!("{only}{}", canonical_suffix(suffix)));
        }
    }
    None
}

/// Strip any recognized suffix from a type identifier, yielding the base
/// type a variant overrides.
pub fn base_type(type_id: &str) -> &str {
    for suffix in SUFFIXES {
        if let Some(base) = type_id.strip_suffix(suffix) {
            return base;
        }
    }
    type_id
}
