//! Game-root selection.
//!
//! Each supported game is identified by a distinguishing install-directory
//! segment; a candidate path claims a game when its segments contain that
//! token verbatim (case-insensitive). Whole-segment matching keeps
//! "Dark Souls II" from claiming a "Dark Souls II Scholar of the First Sin"
//! install. No fuzzy matching.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fmgcat_core::Game;

use crate::error::ScanError;

/// Whether a path contains `part` as a whole segment, case-insensitively.
/// Splits on both separators so Windows-style candidates also match.
fn has_segment(path: &Path, part: &str) -> bool {
    let part = part.to_lowercase();
    path.to_string_lossy()
        .split(['/', '\\'])
        .any(|segment| segment.to_lowercase() == part)
}

/// Map every supported game to its root directory.
///
/// Pure selection over the candidate list; the first matching candidate
/// wins. Fails on the first game with no match, before any scanning.
pub fn resolve_roots(candidates: &[PathBuf]) -> Result<BTreeMap<Game, PathBuf>, ScanError> {
    let mut roots = BTreeMap::new();
    for &game in Game::all() {
        let part = game.path_part();
        let root = candidates
            .iter()
            .find(|c| has_segment(c, part))
            .ok_or(ScanError::MissingGameRoot {
                game,
                path_part: part,
            })?;
        roots.insert(game, root.clone());
    }
    Ok(roots)
}
