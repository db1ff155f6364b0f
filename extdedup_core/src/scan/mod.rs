//! Directory traversal and grouping
//!
//! Walks the scan root with walkdir and groups every file carrying one of the
//! two tracked extensions by its base name. The base name keeps the
//! directory part, so `a.png` and `sub/a.jpg` never share a group.

mod filter;
mod walker;

pub use filter::ExcludeFilter;
pub use walker::{ScanOptions, scan};

use std::path::PathBuf;

use crate::classify::Presence;

/// All tracked extensions seen for one base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Path relative to the scan root, without extension
    pub base: PathBuf,
    /// Which tracked extensions exist next to `base`
    pub presence: Presence,
}
