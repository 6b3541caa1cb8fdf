//! Skip and exclusion rules for the walker.
//!
//! The same logical resource is sometimes packaged more than once per title
//! release; these rules keep exactly one copy. Per-game quirks live in a
//! predicate table rather than inline conditionals so new games stay
//! additive.

use fmgcat_core::Game;

/// Whether a directory is skipped outright (not descended into). These hold
/// pristine backups or already-decompressed duplicates that would produce
/// false duplicate records.
pub fn skip_dir(name: &str) -> bool {
    name == "vanilla" || name.contains("dcx") || name.starts_with("old_patch")
}

/// Whether a root-relative path is even a candidate: only the `msg` and
/// `menu/text` trees hold localized text.
pub fn included(rel_path: &str) -> bool {
    let lower = rel_path.to_lowercase();
    lower.starts_with("msg") || lower.starts_with("menu/text")
}

/// One exclusion predicate over a root-relative path.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Drop paths containing the substring.
    Contains(&'static str),
    /// Drop paths NOT containing the substring (keep-only rule).
    NotContains(&'static str),
    /// Drop paths ending with the suffix.
    EndsWith(&'static str),
}

impl Rule {
    fn drops(&self, rel_path: &str) -> bool {
        match self {
            Rule::Contains(s) => rel_path.contains(s),
            Rule::NotContains(s) => !rel_path.contains(s),
            Rule::EndsWith(s) => rel_path.ends_with(s),
        }
    }
}

/// Per-game packaging quirks.
const GAME_RULES: &[(Game, &[Rule])] = &[
    // DS3's dlc1 msgbnds are superseded by the dlc2 ones, which carry all
    // base + DLC text.
    (Game::DarkSouls3, &[Rule::Contains("dlc1.msgbnd")]),
    // Elden Ring repackages everything into the _dlc02 msgbnds.
    (Game::EldenRing, &[Rule::NotContains("_dlc02.msgbnd")]),
    // Demon's Souls ships both DCX and non-DCX copies of each binder.
    (Game::DemonsSouls, &[Rule::EndsWith("msgbnd")]),
    // Japanese text lives under jpnjp for these titles; the "japanese"
    // folder is a leftover.
    (Game::Bloodborne, &[Rule::Contains("/japanese/")]),
    (Game::Sekiro, &[Rule::Contains("/japanese/")]),
];

/// Binders that never hold localized game text (sample data, region
/// gating, profanity lists).
const DROPPED_BINDERS: &[&str] = &[
    "sample.msgbnd.dcx",
    "sellregion.msgbnd.dcx",
    "ngword.msgbnd.dcx",
];

/// Whether a candidate path is excluded for the given game.
pub fn excluded(game: Game, rel_path: &str) -> bool {
    if DROPPED_BINDERS.iter().any(|b| rel_path.ends_with(b)) {
        return true;
    }
    GAME_RULES
        .iter()
        .filter(|(g, _)| *g == game)
        .flat_map(|(_, rules)| rules.iter())
        .any(|rule| rule.drops(rel_path))
}
