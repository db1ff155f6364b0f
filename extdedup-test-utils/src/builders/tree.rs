//! Builder for temporary directory trees

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builds a throwaway directory tree for a test scenario
///
/// ```no_run
/// use extdedup_test_utils::TreeBuilder;
///
/// let tree = TreeBuilder::new()
///     .with_files(&["a.png", "a.jpg", "sub/a.png"])
///     .build();
/// assert!(tree.path().join("sub/a.png").exists());
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
}

impl TreeBuilder {
    /// Create a new, empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; its content is its own relative path
    pub fn with_file(mut self, relative: &str) -> Self {
        self.files
            .push((PathBuf::from(relative), relative.as_bytes().to_vec()));
        self
    }

    /// Add several files at once
    pub fn with_files(self, relatives: &[&str]) -> Self {
        relatives
            .iter()
            .fold(self, |builder, relative| builder.with_file(relative))
    }

    /// Add a file with explicit content
    pub fn with_file_content(mut self, relative: &str, content: &[u8]) -> Self {
        self.files.push((PathBuf::from(relative), content.to_vec()));
        self
    }

    /// Add an empty directory
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.dirs.push(PathBuf::from(relative));
        self
    }

    /// Materialize the tree in a new temporary directory
    pub fn build(self) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");

        for relative in &self.dirs {
            fs::create_dir_all(dir.path().join(relative)).expect("create directory");
        }

        for (relative, content) in &self.files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent directory");
            }
            fs::write(&path, content).expect("write file");
        }

        dir
    }
}

/// List every regular file below `root`, relative and sorted
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.push(path.strip_prefix(root).expect("under root").to_path_buf());
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}
