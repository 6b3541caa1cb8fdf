//! Path-convention classification for FMG records.
//!
//! Derives a record's category and language from where it sits in the game
//! tree. The conventions differ across titles (the series spans 15+ years of
//! internal naming), so the rules here are ordered and game-aware.

use crate::error::ClassifyError;
use crate::{FmgCategory, FmgRecord, Game};

/// Category tokens in probe order. The first one found as a `/`-preceded
/// segment of the binder path wins.
const CATEGORY_TOKENS: &[(&str, FmgCategory)] =
    &[("item", FmgCategory::Item), ("menu", FmgCategory::Menu)];

/// Derive the category of a record.
///
/// Loose files (no binder) are uncategorized. Binder entries must carry one
/// of the known category tokens in the binder path.
pub fn category(record: &FmgRecord) -> Result<FmgCategory, ClassifyError> {
    let Some(binder_path) = record.binder_path.as_deref() else {
        return Ok(FmgCategory::None);
    };
    for (token, cat) in CATEGORY_TOKENS {
        if binder_path.contains(&format!("/{token}")) {
            return Ok(*cat);
        }
    }
    Err(ClassifyError::UnknownCategory {
        record: record.to_string(),
    })
}

/// Derive the lowercase language token of a record.
///
/// Uses the binder path when present, the record's own path otherwise:
/// - `msg/<lang>/...` — second segment, lowercased. Demon's Souls has no
///   locale folder for Japanese (the binder sits directly under `msg/`), so a
///   segment containing `msgbnd` is forced to `japanese`.
/// - `menu/text/<lang>/...` — third segment, lowercased.
pub fn language(record: &FmgRecord) -> Result<String, ClassifyError> {
    let path = record.binder_path.as_deref().unwrap_or(&record.path);
    let lang = if let Some(rest) = path.strip_prefix("msg/") {
        let segment = rest.split('/').next().unwrap_or("");
        let lang = segment.to_lowercase();
        if record.game == Game::DemonsSouls && lang.contains("msgbnd") {
            "japanese".to_string()
        } else {
            lang
        }
    } else if let Some(rest) = path.strip_prefix("menu/text/") {
        let segment = rest.split('/').next().unwrap_or("");
        segment.to_lowercase()
    } else {
        return Err(ClassifyError::UnknownLanguage {
            record: record.to_string(),
        });
    };
    Ok(lang)
}
