use fmgcat_core::ClassifyError;
use thiserror::Error;

/// Errors that can occur while loading the curated tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("invalid key entry '{0}': expected slot/name/type")]
    InvalidEntry(String),

    #[error("duplicate key entry for {0}")]
    DuplicateEntry(String),
}

/// Errors that abort catalog aggregation.
///
/// The generated catalog is consumed as ground truth downstream, so every
/// condition here is fatal for the whole run; no partial catalog is emitted.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record's TypeKey has no curated or inferable type identifier.
    #[error("unresolved FMG {record}")]
    UnresolvedResource { record: String },

    /// Two physically distinct resources collapsed to one type identifier
    /// within a game.
    #[error("conflicting mappings for type {type_id}: {existing} vs {incoming}")]
    ConflictingTypeMapping {
        type_id: String,
        existing: String,
        incoming: String,
    },

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
