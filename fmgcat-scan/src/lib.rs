//! Filesystem scanning: game-root resolution and the binder walk.
//!
//! Turns a set of candidate install paths into a deterministic stream of
//! `FmgRecord`s, one per localized text resource found on disk. Container
//! decoding is behind the [`BinderReader`] trait; this crate only decides
//! which files are worth handing to it.

pub mod binder;
pub mod error;
pub mod roots;
pub mod rules;
pub mod walk;

pub use binder::{BinderEntry, BinderReader};
pub use error::ScanError;
pub use roots::resolve_roots;
pub use walk::{scan_all, scan_game};
