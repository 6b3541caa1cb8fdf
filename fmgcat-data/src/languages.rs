//! The canonical language table.
//!
//! Maps lowercase path-level locale tokens (`engus`, `frafr`, `japanese`,
//! ...) to game-independent canonical language names. Shared across all
//! games; tokens missing from the table are preserved in the catalog but
//! carry no canonical name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DataError;

/// The built-in copy of the language table.
const BUILTIN_LANGUAGES: &str = include_str!("../data/languages.yaml");

/// Indexed language-token → canonical-name table.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    map: BTreeMap<String, String>,
}

impl LanguageTable {
    /// Load the table embedded in the crate.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_yaml_str(BUILTIN_LANGUAGES, "<builtin languages>")
    }

    /// Load a table from a YAML file (a token → name mapping).
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&contents, &path.display().to_string())
    }

    fn from_yaml_str(yaml: &str, origin: &str) -> Result<Self, DataError> {
        let map: BTreeMap<String, String> =
            serde_yml::from_str(yaml).map_err(|e| DataError::Parse {
                path: origin.to_string(),
                source: e,
            })?;
        Ok(Self { map })
    }

    /// Canonical name for a locale token. Tokens are expected to already be
    /// lowercase (the classifier normalizes them).
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    /// All distinct canonical names, lexicographically ordered and prefixed
    /// with the `Unspecified` sentinel for absent/illegal values.
    pub fn canonical_idents(&self) -> Vec<String> {
        let mut idents = vec!["Unspecified".to_string()];
        let mut names: Vec<String> = self.map.values().cloned().collect();
        names.sort_unstable();
        names.dedup();
        idents.extend(names);
        idents
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
