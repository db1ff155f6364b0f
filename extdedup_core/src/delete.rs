//! Executing a [`DedupPlan`]
//!
//! Deletion walks the sorted delete list once. A file that is already gone is
//! not an error: it is recorded and the run continues. Any other failure is
//! recorded as well and never stops the remaining removals; callers decide
//! what a non-empty failure list means for them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::DedupPlan;

/// Removes a single file
///
/// Exists so tests can inject failures without a real filesystem race.
pub trait Remover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Removes files with `std::fs::remove_file`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Whether to actually delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    DryRun,
    Live,
}

impl DeleteMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Live }
    }
}

/// Per-file outcome, reported as it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionEvent<'a> {
    WouldRemove(&'a Path),
    Removed(&'a Path),
    Missing(&'a Path),
    Failed(&'a Path, &'a str),
}

/// A removal that failed for a reason other than the file being gone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of executing a plan; paths are relative to the scan root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    pub would_remove: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub failed: Vec<FailedRemoval>,
}

impl DeletionReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Execute the delete list of `plan` below `root`
///
/// `observer` sees every per-file outcome in list order, which lets a
/// reporter print progress lines without buffering.
pub fn execute<F>(
    plan: &DedupPlan,
    root: &Path,
    mode: DeleteMode,
    remover: &dyn Remover,
    mut observer: F,
) -> DeletionReport
where
    F: FnMut(&DeletionEvent<'_>),
{
    let mut report = DeletionReport::default();

    for relative in &plan.delete {
        if mode == DeleteMode::DryRun {
            observer(&DeletionEvent::WouldRemove(relative));
            report.would_remove.push(relative.clone());
            continue;
        }

        let path = root.join(relative);
        match remover.remove(&path) {
            Ok(()) => {
                log::debug!("Removed {}", path.display());
                observer(&DeletionEvent::Removed(relative));
                report.removed.push(relative.clone());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Already gone, skipping {}", path.display());
                observer(&DeletionEvent::Missing(relative));
                report.missing.push(relative.clone());
            }
            Err(e) => {
                let reason = e.to_string();
                log::warn!("Failed to remove {}: {reason}", path.display());
                observer(&DeletionEvent::Failed(relative, &reason));
                report.failed.push(FailedRemoval {
                    path: relative.clone(),
                    reason,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Fails with a fixed error kind for one path, succeeds for the rest
    struct FailingRemover {
        fail_on: PathBuf,
        kind: io::ErrorKind,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Remover for FailingRemover {
        fn remove(&self, path: &Path) -> io::Result<()> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if path == self.fail_on {
                Err(io::Error::from(self.kind))
            } else {
                Ok(())
            }
        }
    }

    fn plan(delete: &[&str]) -> DedupPlan {
        DedupPlan {
            keep: Vec::new(),
            delete: delete.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn test_dry_run_never_touches_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();

        let mut events = 0;
        let report = execute(
            &plan(&["a.jpg"]),
            dir.path(),
            DeleteMode::DryRun,
            &FsRemover,
            |_| events += 1,
        );

        assert!(dir.path().join("a.jpg").exists());
        assert_eq!(report.would_remove, vec![PathBuf::from("a.jpg")]);
        assert!(report.removed.is_empty());
        assert_eq!(events, 1);
    }

    #[test]
    fn test_live_removes_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();

        let report = execute(
            &plan(&["a.jpg"]),
            dir.path(),
            DeleteMode::Live,
            &FsRemover,
            |_| {},
        );

        assert!(!dir.path().join("a.jpg").exists());
        assert_eq!(report.removed, vec![PathBuf::from("a.jpg")]);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_missing_file_is_skipped_and_run_continues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.jpg"), b"jpg").unwrap();

        let mut seen = Vec::new();
        let report = execute(
            &plan(&["a.jpg", "b.jpg"]),
            dir.path(),
            DeleteMode::Live,
            &FsRemover,
            |event| seen.push(format!("{event:?}")),
        );

        assert_eq!(report.missing, vec![PathBuf::from("a.jpg")]);
        assert_eq!(report.removed, vec![PathBuf::from("b.jpg")]);
        assert!(!report.has_failures());
        assert!(seen[0].starts_with("Missing"));
        assert!(seen[1].starts_with("Removed"));
    }

    #[test]
    fn test_other_failures_are_recorded_and_do_not_stop_the_run() {
        let root = Path::new("/photos");
        let remover = FailingRemover {
            fail_on: root.join("a.jpg"),
            kind: io::ErrorKind::PermissionDenied,
            calls: RefCell::new(Vec::new()),
        };

        let report = execute(
            &plan(&["a.jpg", "b.jpg"]),
            root,
            DeleteMode::Live,
            &remover,
            |_| {},
        );

        assert_eq!(remover.calls.borrow().len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, PathBuf::from("a.jpg"));
        assert_eq!(report.removed, vec![PathBuf::from("b.jpg")]);
        assert!(report.has_failures());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(DeleteMode::from_dry_run(true), DeleteMode::DryRun);
        assert_eq!(DeleteMode::from_dry_run(false), DeleteMode::Live);
    }
}
