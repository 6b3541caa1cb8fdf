//! Curated tables, key resolution, and catalog aggregation.
//!
//! This crate owns the hand-maintained data — the FMG key table and the
//! canonical language map — and the logic that folds scanned records into
//! per-game catalogs. The tables are explicit values constructed once per
//! run and passed down; nothing here keeps global state.

pub mod catalog;
pub mod error;
pub mod keys;
pub mod languages;
pub mod resolver;

pub use catalog::{build_catalogs, CatalogSet, GameCatalog, KeyInfo};
pub use error::{CatalogError, DataError};
pub use keys::{KeyEntry, KeyTable};
pub use languages::LanguageTable;

/// The read-only curated tables for one run.
#[derive(Debug, Clone)]
pub struct Tables {
    pub keys: KeyTable,
    pub languages: LanguageTable,
}

impl Tables {
    /// Load the tables embedded in the crate.
    pub fn builtin() -> Result<Self, DataError> {
        Ok(Self {
            keys: KeyTable::builtin()?,
            languages: LanguageTable::builtin()?,
        })
    }
}

/// Serializer seam for the aggregated catalog.
///
/// The exact byte layout of the persisted artifact is a downstream contract;
/// implementations only get to see the finished, deterministic `CatalogSet`
/// and the read-only tables it was built from.
pub trait CatalogEmitter {
    fn emit(&mut self, tables: &Tables, set: &CatalogSet) -> std::io::Result<()>;
}
