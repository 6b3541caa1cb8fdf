use std::path::PathBuf;

use fmgcat_core::Game;
use thiserror::Error;

/// Errors that can occur while resolving roots and scanning game trees.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No candidate path matches a configured game. Fatal before any
    /// scanning starts.
    #[error("path for {game} not provided: path part \"{path_part}\" not found")]
    MissingGameRoot {
        game: Game,
        path_part: &'static str,
    },

    /// Traversal produced a path outside the expected base — an environment
    /// assumption violation, not a data problem.
    #[error("bad prefix {path} (expected under {base})")]
    BadPathPrefix { path: PathBuf, base: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
