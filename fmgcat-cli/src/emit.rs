//! Text rendering for the two output modes.
//!
//! `keyed_summary` renders the cross-game key survey used to maintain the
//! curated tables; `TextEmitter` renders finished per-game catalogs. Both
//! walk ordered maps only, so output is stable across runs.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;

use fmgcat_core::{classify, FmgRecord, TypeKey};
use fmgcat_data::resolver::resolve;
use fmgcat_data::{CatalogError, CatalogEmitter, CatalogSet, Tables};

fn push_distinct(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Render the keyed-type survey: one line per distinct (slot, name) key
/// across every game, followed by the observed language tokens.
///
/// Unlike catalog aggregation, a key with no resolvable type is not an
/// error here; the survey exists precisely to show which keys still need
/// a curated entry. The type column is left blank for those.
pub(crate) fn keyed_summary(
    tables: &Tables,
    records: &[FmgRecord],
) -> Result<String, CatalogError> {
    let mut by_key: BTreeMap<TypeKey, Vec<&FmgRecord>> = BTreeMap::new();
    for record in records {
        if record.name.ends_with("_00") {
            continue;
        }
        by_key.entry(record.type_key()).or_default().push(record);
    }

    let mut out = String::new();
    for (key, observed) in &by_key {
        let type_id = resolve(&tables.keys, key).unwrap_or_default();
        let mut categories = Vec::new();
        let mut games = Vec::new();
        for record in observed {
            push_distinct(&mut categories, classify::category(record)?.token());
            push_distinct(&mut games, &record.game.to_string());
        }
        let _ = writeln!(
            out,
            "{key}/{type_id} // {} [{}]",
            categories.join(", "),
            games.join(", ")
        );
    }

    let mut by_language: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in records {
        let token = classify::language(record)?;
        push_distinct(by_language.entry(token).or_default(), &record.game.to_string());
    }
    let _ = writeln!(out);
    for (token, games) in &by_language {
        let canonical = tables.languages.canonical(token).unwrap_or_default();
        let _ = writeln!(out, "{token} = {canonical} // [{}]", games.join(", "));
    }
    Ok(out)
}

/// Render a catalog set as plain text.
///
/// The identifier universes come first, each headed by the `Unspecified`
/// sentinel so downstream consumers always have a slot for "no value".
pub(crate) fn render_catalogs(tables: &Tables, set: &CatalogSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "languages = [{}]", tables.languages.canonical_idents().join(", "));
    let _ = writeln!(out, "types = [{}]", tables.keys.type_idents().join(", "));

    for (game, catalog) in &set.games {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{game}]");
        for (type_id, info) in &catalog.by_type {
            let _ = writeln!(
                out,
                "type {type_id} = {} {}#{} (base {})",
                info.category, info.fmg_name, info.binder_id, info.base_type
            );
        }
        for (base, variants) in &catalog.overrides {
            let _ = writeln!(out, "override {base} <- [{}]", variants.join(", "));
        }
        for (name, types) in &catalog.by_name {
            let _ = writeln!(out, "name {name} = [{}]", types.join(", "));
        }
        for (slot, types) in &catalog.by_slot {
            let _ = writeln!(out, "slot {slot} = [{}]", types.join(", "));
        }
        for (token, canonical) in &catalog.languages {
            let _ = writeln!(
                out,
                "language {token} = {}",
                canonical.as_deref().unwrap_or("Unspecified")
            );
        }
    }
    out
}

/// Writes the rendered catalog text to any `io::Write` sink.
pub(crate) struct TextEmitter<W: Write> {
    sink: W,
}

impl<W: Write> TextEmitter<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> CatalogEmitter for TextEmitter<W> {
    fn emit(&mut self, tables: &Tables, set: &CatalogSet) -> std::io::Result<()> {
        self.sink.write_all(render_catalogs(tables, set).as_bytes())
    }
}
