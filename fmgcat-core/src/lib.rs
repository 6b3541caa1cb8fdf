//! Core data model for the FMG census pipeline.
//!
//! An FMG is a single localized-text resource inside a FromSoftware game:
//! either a loose `.fmg` file or an entry inside a binder archive
//! (`.msgbnd` / `.msgbnd.dcx`). This crate holds the record type produced by
//! scanning, the game identity enum, and the path-convention classifier.

pub mod classify;
pub mod error;
pub mod game;

pub use error::ClassifyError;
pub use game::{Game, GameParseError};

/// The semantic purpose of a binder, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FmgCategory {
    /// Item text (names, descriptions, lore).
    Item,
    /// Menu and system text.
    Menu,
    /// A loose top-level resource, not inside a categorized binder.
    None,
}

impl FmgCategory {
    /// Capitalized identifier used in catalog output.
    pub fn ident(&self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Menu => "Menu",
            Self::None => "None",
        }
    }

    /// The lowercase path token this category is derived from.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Menu => "menu",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for FmgCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ident())
    }
}

/// The cross-game join key for "the same kind of resource": the binder slot
/// id (−1 for loose files) plus the FMG's own name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey {
    pub slot: i32,
    pub name: String,
}

impl TypeKey {
    pub fn new(slot: i32, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.slot, self.name)
    }
}

/// One discovered FMG resource.
///
/// Immutable after construction; paths are game-root- or binder-relative and
/// normalized to forward slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmgRecord {
    /// The game this record was found in.
    pub game: Game,
    /// Path of the `.fmg` itself (binder-internal for binder entries).
    pub path: String,
    /// Basename of `path` with the `.fmg` extension stripped.
    pub name: String,
    /// Game-root-relative path of the containing binder, if any.
    pub binder_path: Option<String>,
    /// The binder-assigned entry id; −1 for loose files.
    pub binder_id: i32,
}

impl FmgRecord {
    /// Basename of an FMG path with the extension stripped, or `None` when
    /// the path is not an `.fmg` file at all.
    pub fn fmg_stem(path: &str) -> Option<&str> {
        let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
        base.strip_suffix(".fmg")
    }

    /// Build a record for a loose `.fmg` file. `None` if the path is not an
    /// FMG.
    pub fn loose(game: Game, path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        let name = Self::fmg_stem(&path)?.to_string();
        Some(Self {
            game,
            path,
            name,
            binder_path: None,
            binder_id: -1,
        })
    }

    /// Build a record for an entry inside a binder. `None` if the entry name
    /// is not an FMG.
    pub fn in_binder(
        game: Game,
        path: impl Into<String>,
        binder_path: impl Into<String>,
        binder_id: i32,
    ) -> Option<Self> {
        let path = path.into();
        let name = Self::fmg_stem(&path)?.to_string();
        Some(Self {
            game,
            path,
            name,
            binder_path: Some(binder_path.into()),
            binder_id,
        })
    }

    /// The cross-game join key for this record.
    pub fn type_key(&self) -> TypeKey {
        TypeKey::new(self.binder_id, self.name.clone())
    }
}

impl std::fmt::Display for FmgRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.binder_path {
            None => write!(f, "{} {}", self.game, self.path),
            Some(binder) => write!(f, "{} {} {}:{}", self.game, binder, self.binder_id, self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmg_stem_strips_directory_and_extension() {
        assert_eq!(FmgRecord::fmg_stem("msg/engus/WeaponName.fmg"), Some("WeaponName"));
        assert_eq!(FmgRecord::fmg_stem("武器名.fmg"), Some("武器名"));
        assert_eq!(FmgRecord::fmg_stem(r"N:\GR\data\INTERROOT_win64\TalkMsg.fmg"), Some("TalkMsg"));
    }

    #[test]
    fn fmg_stem_rejects_non_fmg() {
        assert_eq!(FmgRecord::fmg_stem("msg/engus/item.msgbnd.dcx"), None);
        assert_eq!(FmgRecord::fmg_stem("readme.txt"), None);
    }

    #[test]
    fn loose_record_has_no_binder() {
        let record = FmgRecord::loose(Game::DarkSouls2, "menu/text/english/itemname.fmg").unwrap();
        assert_eq!(record.name, "itemname");
        assert_eq!(record.binder_id, -1);
        assert!(record.binder_path.is_none());
        assert_eq!(record.type_key(), TypeKey::new(-1, "itemname"));
    }

    #[test]
    fn binder_record_display_includes_slot() {
        let record = FmgRecord::in_binder(
            Game::EldenRing,
            "WeaponName.fmg",
            "msg/engus/item_dlc02.msgbnd.dcx",
            11,
        )
        .unwrap();
        assert_eq!(
            record.to_string(),
            "EldenRing msg/engus/item_dlc02.msgbnd.dcx 11:WeaponName.fmg"
        );
    }

    #[test]
    fn non_fmg_entry_is_rejected() {
        assert!(FmgRecord::in_binder(Game::Sekiro, "font.ccm", "msg/jpnjp/item.msgbnd.dcx", 1).is_none());
    }
}
