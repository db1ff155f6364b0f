//! extdedup core library
//!
//! Finds files that share a base name but differ in extension and removes
//! the default-extension variant whenever the preferred one exists.
//!
//! A run is strictly sequential: [`scan`] groups files, [`DedupPlan`]
//! classifies the groups into sorted keep/delete lists, and
//! [`delete::execute`] consumes the delete list.

pub mod classify;
pub mod delete;
pub mod error;
pub mod extension;
pub mod scan;

pub use classify::{Decision, DedupPlan, Presence};
pub use delete::{
    DeleteMode, DeletionEvent, DeletionReport, FailedRemoval, FsRemover, Remover, execute,
};
pub use error::{Error, Result};
pub use extension::{Extension, ExtensionPair, Tracked};
pub use scan::{Group, ScanOptions, scan};

use std::path::Path;

/// Scan `root` and classify the result in one step
pub fn plan(root: &Path, pair: &ExtensionPair, options: &ScanOptions) -> Result<DedupPlan> {
    let groups = scan(root, pair, options)?;
    Ok(DedupPlan::from_groups(groups, pair))
}
