//! Cross-game catalog aggregation.
//!
//! Folds classified, resolved records into per-game indices. Every condition
//! that would corrupt the catalog (unresolved key, conflicting mapping,
//! unclassifiable record) aborts the whole run; the only records dropped on
//! purpose are the reserved `_00` duplicate slots.

use std::collections::BTreeMap;

use fmgcat_core::{classify, FmgCategory, FmgRecord, Game};

use crate::error::CatalogError;
use crate::resolver::{base_type, resolve};
use crate::Tables;

/// The reserved suffix for deliberately-unused duplicate slots.
const UNUSED_SUFFIX: &str = "_00";

/// The per-type record signature within one game.
///
/// Two records mapping to the same type identifier must agree on every field
/// here; a disagreement means two physically distinct resources collapsed to
/// one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    pub game: Game,
    pub category: FmgCategory,
    pub type_id: String,
    pub base_type: String,
    pub fmg_name: String,
    pub binder_id: i32,
}

impl std::fmt::Display for KeyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}({}) {}#{}",
            self.game, self.category, self.type_id, self.base_type, self.fmg_name, self.binder_id
        )
    }
}

/// The aggregated indices for one game.
///
/// All maps are ordered so repeated runs over identical input reproduce the
/// catalog byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    /// Type identifier → record signature.
    pub by_type: BTreeMap<String, KeyInfo>,
    /// Base type → variant types that override it, most recent first.
    pub overrides: BTreeMap<String, Vec<String>>,
    /// FMG name → type identifiers, first observation first.
    pub by_name: BTreeMap<String, Vec<String>>,
    /// Binder slot id → type identifiers (slot ≥ 0 only).
    pub by_slot: BTreeMap<i32, Vec<String>>,
    /// Observed language token → canonical name (`None` when unmapped).
    pub languages: BTreeMap<String, Option<String>>,
}

/// The full aggregation result: one catalog per supported game.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    pub games: BTreeMap<Game, GameCatalog>,
}

impl CatalogSet {
    pub fn get(&self, game: Game) -> Option<&GameCatalog> {
        self.games.get(&game)
    }
}

fn push_distinct(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Aggregate scanned records into per-game catalogs.
///
/// Fails fast on the first unresolved or conflicting record; no partial
/// catalog is returned.
pub fn build_catalogs(tables: &Tables, records: &[FmgRecord]) -> Result<CatalogSet, CatalogError> {
    let mut set = CatalogSet::default();
    for &game in Game::all() {
        // Variant observation order, duplicates included; collapsed to a
        // distinct newest-first list once the game is done.
        let mut observed_variants: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut catalog = GameCatalog::default();

        for record in records.iter().filter(|r| r.game == game) {
            if record.name.ends_with(UNUSED_SUFFIX) {
                continue;
            }
            let key = record.type_key();
            let Some(type_id) = resolve(&tables.keys, &key) else {
                return Err(CatalogError::UnresolvedResource {
                    record: record.to_string(),
                });
            };
            let base = base_type(&type_id).to_string();
            let info = KeyInfo {
                game,
                category: classify::category(record)?,
                type_id: type_id.clone(),
                base_type: base.clone(),
                fmg_name: record.name.clone(),
                binder_id: record.binder_id,
            };
            if let Some(existing) = catalog.by_type.get(&type_id) {
                if *existing != info {
                    return Err(CatalogError::ConflictingTypeMapping {
                        type_id,
                        existing: existing.to_string(),
                        incoming: info.to_string(),
                    });
                }
            } else {
                catalog.by_type.insert(type_id.clone(), info);
            }

            if type_id != base {
                observed_variants
                    .entry(base)
                    .or_default()
                    .push(type_id.clone());
            }
            push_distinct(catalog.by_name.entry(record.name.clone()).or_default(), &type_id);
            if record.binder_id >= 0 {
                push_distinct(catalog.by_slot.entry(record.binder_id).or_default(), &type_id);
            }

            let lang = classify::language(record)?;
            let canonical = tables.languages.canonical(&lang).map(String::from);
            catalog.languages.insert(lang, canonical);
        }

        // The global Steam release of DS2 ships no Japanese text, but the
        // slot must still be addressable downstream.
        if matches!(game, Game::DarkSouls2 | Game::DarkSouls2Sotfs) {
            catalog.languages.insert(
                "japanese".to_string(),
                tables.languages.canonical("japanese").map(String::from),
            );
        }

        for (base, variants) in observed_variants {
            let mut newest_first = Vec::new();
            for variant in variants.iter().rev() {
                push_distinct(&mut newest_first, variant);
            }
            catalog.overrides.insert(base, newest_first);
        }

        set.games.insert(game, catalog);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KeyEntry, KeyTable};
    use crate::languages::LanguageTable;

    fn test_tables(entries: &[&str]) -> Tables {
        let entries = entries
            .iter()
            .map(|e| KeyEntry::parse(e).unwrap())
            .collect();
        Tables {
            keys: KeyTable::from_entries(entries).unwrap(),
            languages: LanguageTable::builtin().unwrap(),
        }
    }

    fn item_record(game: Game, name: &str, slot: i32, lang: &str) -> FmgRecord {
        FmgRecord::in_binder(
            game,
            format!("{name}.fmg"),
            format!("msg/{lang}/item.msgbnd.dcx"),
            slot,
        )
        .unwrap()
    }

    #[test]
    fn builds_indices_for_resolved_records() {
        let tables = test_tables(&["11/weaponname/WeaponName"]);
        let records = vec![
            item_record(Game::DarkSouls3, "weaponname", 11, "engus"),
            item_record(Game::DarkSouls3, "weaponname", 11, "frafr"),
        ];
        let set = build_catalogs(&tables, &records).unwrap();
        let catalog = set.get(Game::DarkSouls3).unwrap();

        let info = &catalog.by_type["WeaponName"];
        assert_eq!(info.category, FmgCategory::Item);
        assert_eq!(info.base_type, "WeaponName");
        assert_eq!(info.binder_id, 11);
        assert_eq!(catalog.by_name["weaponname"], ["WeaponName"]);
        assert_eq!(catalog.by_slot[&11], ["WeaponName"]);
        assert_eq!(catalog.languages["engus"], Some("English".to_string()));
        assert_eq!(catalog.languages["frafr"], Some("French".to_string()));
        assert!(catalog.overrides.is_empty());
    }

    #[test]
    fn unused_double_zero_slots_are_skipped() {
        let tables = test_tables(&[]);
        let records = vec![item_record(Game::Sekiro, "weaponname_00", 11, "engus")];
        let set = build_catalogs(&tables, &records).unwrap();
        assert!(set.get(Game::Sekiro).unwrap().by_type.is_empty());
    }

    #[test]
    fn unresolved_record_aborts_the_run() {
        let tables = test_tables(&[]);
        let records = vec![item_record(Game::Sekiro, "weaponname", 11, "engus")];
        let err = build_catalogs(&tables, &records).unwrap_err();
        assert!(matches!(err, CatalogError::UnresolvedResource { .. }));
    }

    #[test]
    fn conflicting_category_derivations_abort_the_run() {
        let tables = test_tables(&["11/weaponname/WeaponName"]);
        let records = vec![
            item_record(Game::Sekiro, "weaponname", 11, "engus"),
            FmgRecord::in_binder(
                Game::Sekiro,
                "weaponname.fmg",
                "msg/engus/menu.msgbnd.dcx",
                11,
            )
            .unwrap(),
        ];
        let err = build_catalogs(&tables, &records).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ConflictingTypeMapping { type_id, .. } if type_id == "WeaponName"
        ));
    }

    #[test]
    fn identical_repeat_observations_are_not_conflicts() {
        let tables = test_tables(&["11/weaponname/WeaponName"]);
        let records = vec![
            item_record(Game::Sekiro, "weaponname", 11, "engus"),
            item_record(Game::Sekiro, "weaponname", 11, "engus"),
        ];
        assert!(build_catalogs(&tables, &records).is_ok());
    }

    #[test]
    fn overrides_list_newest_variant_first() {
        let tables = test_tables(&[
            "11/weaponname/WeaponName",
            "211/weaponname_dlc1/WeaponName_DLC1",
            "251/weaponname_dlc2/WeaponName_DLC2",
        ]);
        let records = vec![
            item_record(Game::DarkSouls3, "weaponname", 11, "engus"),
            item_record(Game::DarkSouls3, "weaponname_dlc1", 211, "engus"),
            item_record(Game::DarkSouls3, "weaponname_dlc2", 251, "engus"),
            // A later language pass repeats the variants; the distinct list
            // must still probe the most recently observed variant first.
            item_record(Game::DarkSouls3, "weaponname_dlc1", 211, "frafr"),
            item_record(Game::DarkSouls3, "weaponname_dlc2", 251, "frafr"),
        ];
        let set = build_catalogs(&tables, &records).unwrap();
        let catalog = set.get(Game::DarkSouls3).unwrap();
        assert_eq!(
            catalog.overrides["WeaponName"],
            ["WeaponName_DLC2", "WeaponName_DLC1"]
        );
        assert!(!catalog.overrides.contains_key("WeaponName_DLC1"));
    }

    #[test]
    fn ds2_family_synthesizes_japanese() {
        let tables = test_tables(&[]);
        let set = build_catalogs(&tables, &[]).unwrap();
        for game in [Game::DarkSouls2, Game::DarkSouls2Sotfs] {
            let catalog = set.get(game).unwrap();
            assert_eq!(catalog.languages["japanese"], Some("Japanese".to_string()));
        }
        assert!(set.get(Game::Bloodborne).unwrap().languages.is_empty());
    }

    #[test]
    fn unmapped_language_token_survives_without_canonical_name() {
        let tables = test_tables(&["11/weaponname/WeaponName"]);
        let records = vec![item_record(Game::Sekiro, "weaponname", 11, "tlhkl")];
        let set = build_catalogs(&tables, &records).unwrap();
        let catalog = set.get(Game::Sekiro).unwrap();
        assert_eq!(catalog.languages["tlhkl"], None);
    }

    #[test]
    fn repeated_runs_reproduce_identical_catalogs() {
        let tables = test_tables(&[
            "11/weaponname/WeaponName",
            "211/weaponname_dlc1/WeaponName_DLC1",
        ]);
        let records = vec![
            item_record(Game::DarkSouls3, "weaponname_dlc1", 211, "engus"),
            item_record(Game::DarkSouls3, "weaponname", 11, "engus"),
        ];
        let a = build_catalogs(&tables, &records).unwrap();
        let b = build_catalogs(&tables, &records).unwrap();
        for (game, catalog) in &a.games {
            let other = b.get(*game).unwrap();
            assert_eq!(catalog.by_type.keys().collect::<Vec<_>>(), other.by_type.keys().collect::<Vec<_>>());
            assert_eq!(catalog.overrides, other.overrides);
            assert_eq!(catalog.by_name, other.by_name);
            assert_eq!(catalog.languages, other.languages);
        }
    }
}
