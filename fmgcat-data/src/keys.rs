//! The curated FMG key table.
//!
//! Maps a `(slot, name)` TypeKey to its canonical type identifier. The table
//! is hand-maintained data, kept in a YAML resource rather than in code so
//! new games and renames are additive edits; a copy is embedded in the crate
//! and an external file can be loaded in its place.

use std::collections::BTreeMap;
use std::path::Path;

use fmgcat_core::TypeKey;

use crate::error::DataError;

/// The built-in copy of the curated key table.
const BUILTIN_KEYS: &str = include_str!("../data/keys.yaml");

/// One curated entry: a TypeKey and the type identifier it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    pub slot: i32,
    pub name: String,
    pub type_id: String,
}

impl KeyEntry {
    /// Parse a compact `slot/name/type` entry.
    ///
    /// The slot is the leading integer and the type identifier the trailing
    /// segment, so FMG names containing `/` would still parse; in practice
    /// they never do.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let invalid = || DataError::InvalidEntry(raw.to_string());
        let (slot_part, rest) = raw.split_once('/').ok_or_else(invalid)?;
        let (name, type_id) = rest.rsplit_once('/').ok_or_else(invalid)?;
        let slot: i32 = slot_part.trim().parse().map_err(|_| invalid())?;
        if name.is_empty() || type_id.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            slot,
            name: name.to_string(),
            type_id: type_id.to_string(),
        })
    }
}

/// Indexed view of the curated key table.
#[derive(Debug, Clone)]
pub struct KeyTable {
    /// (slot, name) → type identifier.
    by_key: BTreeMap<(i32, String), String>,
    /// FMG name → type identifiers of every curated entry with that name,
    /// in table order. Backs suffix-based inference, which ignores the slot.
    by_name: BTreeMap<String, Vec<String>>,
}

impl KeyTable {
    /// Load the table embedded in the crate.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_yaml_str(BUILTIN_KEYS, "<builtin keys>")
    }

    /// Load a table from a YAML file (a list of `slot/name/type` strings).
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&contents, &path.display().to_string())
    }

    fn from_yaml_str(yaml: &str, origin: &str) -> Result<Self, DataError> {
        let raw: Vec<String> = serde_yml::from_str(yaml).map_err(|e| DataError::Parse {
            path: origin.to_string(),
            source: e,
        })?;
        let entries = raw
            .iter()
            .map(|line| KeyEntry::parse(line))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Build the indexed table, rejecting duplicate TypeKeys.
    pub fn from_entries(entries: Vec<KeyEntry>) -> Result<Self, DataError> {
        let mut by_key = BTreeMap::new();
        let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in entries {
            let key = (entry.slot, entry.name.clone());
            if by_key.insert(key, entry.type_id.clone()).is_some() {
                return Err(DataError::DuplicateEntry(format!(
                    "{}/{}",
                    entry.slot, entry.name
                )));
            }
            by_name.entry(entry.name).or_default().push(entry.type_id);
        }
        Ok(Self { by_key, by_name })
    }

    /// Direct curated lookup for a TypeKey.
    pub fn get(&self, key: &TypeKey) -> Option<&str> {
        self.by_key
            .get(&(key.slot, key.name.clone()))
            .map(String::as_str)
    }

    /// Type identifiers of all curated entries with the given FMG name,
    /// regardless of slot.
    pub fn types_for_name(&self, name: &str) -> &[String] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All distinct type identifiers, lexicographically ordered and prefixed
    /// with the `Unspecified` sentinel for absent/illegal values.
    pub fn type_idents(&self) -> Vec<String> {
        let mut idents = vec!["Unspecified".to_string()];
        let mut types: Vec<String> = self.by_key.values().cloned().collect();
        types.sort_unstable();
        types.dedup();
        idents.extend(types);
        idents
    }

    /// Number of curated entries.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
