use thiserror::Error;

/// Errors raised while deriving a record's category or language.
///
/// Every categorized binder is expected to declare its category in its path,
/// and every localized path to follow one of the known layouts; a miss here
/// means the path conventions changed and the whole run must abort rather
/// than emit a silently incomplete catalog.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The binder path contains none of the known category segments.
    #[error("unknown category in {record}")]
    UnknownCategory { record: String },

    /// The path matches neither the `msg/` nor the `menu/text/` layout.
    #[error("unknown language in {record}")]
    UnknownLanguage { record: String },
}
