//! Depth-first traversal of a game root.
//!
//! Produces one `FmgRecord` per loose `.fmg` file and per FMG entry inside a
//! surviving binder. Directories and files are visited in sorted order so a
//! scan of identical input always yields records in the same order.

use std::path::Path;

use fmgcat_core::{FmgRecord, Game};

use crate::binder::BinderReader;
use crate::error::ScanError;
use crate::rules;

/// Scan one game root into records.
pub fn scan_game(
    game: Game,
    root: &Path,
    reader: &dyn BinderReader,
) -> Result<Vec<FmgRecord>, ScanError> {
    let mut records = Vec::new();
    walk_dir(game, root, root, reader, &mut records)?;
    Ok(records)
}

/// Scan every game in the root map, in map (= enum) order.
pub fn scan_all(
    roots: &std::collections::BTreeMap<Game, std::path::PathBuf>,
    reader: &dyn BinderReader,
) -> Result<Vec<FmgRecord>, ScanError> {
    let mut records = Vec::new();
    for (&game, root) in roots {
        log::info!("scanning {} under {}", game, root.display());
        records.extend(scan_game(game, root, reader)?);
    }
    Ok(records)
}

fn walk_dir(
    game: Game,
    dir: &Path,
    base: &Path,
    reader: &dyn BinderReader,
    records: &mut Vec<FmgRecord>,
) -> Result<(), ScanError> {
    if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
        if rules::skip_dir(name) {
            log::debug!("skipping directory {}", dir.display());
            return Ok(());
        }
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| ScanError::io(dir.display().to_string(), e))?
        .collect::<Result<_, _>>()
        .map_err(|e| ScanError::io(dir.display().to_string(), e))?;
    entries.sort_by_key(|e| e.path());

    // Files first, then subdirectories, both in sorted order.
    for entry in entries.iter().filter(|e| e.path().is_file()) {
        let path = entry.path();
        let rel = relative_path(&path, base)?;
        // Sidecar notes under msg/, not resource containers.
        if rel.ends_with(".txt") && rel.starts_with("msg") {
            continue;
        }
        process_file(game, &rel, &path, reader, records)?;
    }
    for entry in entries.iter().filter(|e| e.path().is_dir()) {
        walk_dir(game, &entry.path(), base, reader, records)?;
    }
    Ok(())
}

/// Root-relative path, normalized to forward slashes.
fn relative_path(path: &Path, base: &Path) -> Result<String, ScanError> {
    let rel = path
        .strip_prefix(base)
        .map_err(|_| ScanError::BadPathPrefix {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

fn process_file(
    game: Game,
    rel: &str,
    path: &Path,
    reader: &dyn BinderReader,
    records: &mut Vec<FmgRecord>,
) -> Result<(), ScanError> {
    if !rules::included(rel) || rules::excluded(game, rel) {
        return Ok(());
    }

    let bytes = if rel.ends_with("bnd.dcx") {
        let raw = std::fs::read(path).map_err(|e| ScanError::io(rel, e))?;
        if !reader.is_compressed(&raw) {
            return Ok(());
        }
        reader.decompress(&raw).map_err(|e| ScanError::io(rel, e))?
    } else if rel.ends_with("bnd") {
        std::fs::read(path).map_err(|e| ScanError::io(rel, e))?
    } else {
        // Not a binder at all; a loose .fmg is a record of its own.
        if let Some(record) = FmgRecord::loose(game, rel) {
            records.push(record);
        }
        return Ok(());
    };

    let Some(entries) = reader.parse_entries(&bytes) else {
        // Unrelated binaries share the extension; not recognizing one is
        // expected, not an error.
        log::debug!("skipping unrecognized container {game} {rel}");
        return Ok(());
    };
    for entry in entries {
        if let Some(record) = FmgRecord::in_binder(game, entry.name, rel, entry.id) {
            records.push(record);
        }
    }
    Ok(())
}
