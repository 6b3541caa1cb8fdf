use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Root resolution or scanning failed
    #[error("Scan error: {0}")]
    Scan(#[from] fmgcat_scan::ScanError),

    /// Curated table failed to load
    #[error("Table error: {0}")]
    Data(#[from] fmgcat_data::DataError),

    /// Aggregation failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] fmgcat_data::CatalogError),
}
