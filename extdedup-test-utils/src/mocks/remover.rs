//! Mock remover for injecting deletion failures

use extdedup_core::Remover;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Remover that records every call and fails on request
///
/// Paths without a scripted failure are either removed from disk
/// (`passthrough`) or just recorded.
#[derive(Debug, Default)]
pub struct MockRemover {
    failures: HashMap<PathBuf, io::ErrorKind>,
    passthrough: bool,
    calls: RefCell<Vec<PathBuf>>,
}

impl MockRemover {
    /// Create a mock that only records calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that really removes files unless told to fail
    pub fn passthrough() -> Self {
        Self {
            passthrough: true,
            ..Self::default()
        }
    }

    /// Fail removal of `path` with the given error kind
    pub fn fail_on(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.insert(path.into(), kind);
        self
    }

    /// Every path passed to `remove`, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Remover for MockRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push(path.to_path_buf());

        if let Some(kind) = self.failures.get(path) {
            return Err(io::Error::from(*kind));
        }

        if self.passthrough {
            fs::remove_file(path)
        } else {
            Ok(())
        }
    }
}
