//! Directory walker for grouping files by base name

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{ExcludeFilter, Group};
use crate::classify::Presence;
use crate::error::{IoError, Result, ValidationError};
use crate::extension::ExtensionPair;

/// Options for a scan
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum depth for recursive scans, 1 = root's own files (None = unlimited)
    pub max_depth: Option<usize>,
    /// Glob patterns for paths to leave alone
    pub exclude_patterns: Vec<String>,
}

impl ScanOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set recursive processing
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for recursive scans
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Add exclude patterns
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Depth limit handed to walkdir
    fn effective_max_depth(&self) -> Result<usize> {
        if !self.recursive {
            return Ok(1);
        }

        match self.max_depth {
            Some(0) => Err(ValidationError::invalid_configuration(
                "max_depth must be at least 1",
            )
            .into()),
            Some(depth) => Ok(depth),
            None => Ok(usize::MAX),
        }
    }
}

/// Walk `root` and group tracked files by base name
///
/// Fails before touching anything when the options are invalid or the root
/// cannot be enumerated. Problems below the root are logged and skipped.
/// Groups come back ordered by base path.
pub fn scan(root: &Path, pair: &ExtensionPair, options: &ScanOptions) -> Result<Vec<Group>> {
    let max_depth = options.effective_max_depth()?;
    let filter = ExcludeFilter::new(&options.exclude_patterns)?;

    check_root(root)?;

    log::info!(
        "Scanning {} (recursive: {}, preferred: {}, default: {})",
        root.display(),
        options.recursive,
        pair.preferred(),
        pair.default()
    );
    if !filter.patterns().is_empty() {
        log::debug!("Exclude patterns: {:?}", filter.patterns());
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !filter.is_excluded(relative_to(root, entry.path()))
        });

    let mut groups: BTreeMap<PathBuf, Presence> = BTreeMap::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // The root itself was checked up front, so this is below it
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if !is_candidate(&entry) {
            continue;
        }

        let relative = relative_to(root, entry.path());
        let Some(tracked) = relative.extension().and_then(|ext| pair.classify_ext(ext)) else {
            continue;
        };

        let base = relative.with_extension("");
        log::trace!("{} -> {:?} of {}", relative.display(), tracked, base.display());
        groups.entry(base).or_default().mark(tracked);
    }

    log::debug!("Found {} base name group(s)", groups.len());

    Ok(groups
        .into_iter()
        .map(|(base, presence)| Group { base, presence })
        .collect())
}

/// Make sure the root exists, is a directory and can be listed
fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::not_found(root),
        _ => IoError::from_std(e).with_path(root),
    })?;

    if !metadata.is_dir() {
        return Err(IoError::not_a_directory(root).into());
    }

    fs::read_dir(root).map_err(|e| IoError::from_std(e).with_path(root))?;
    Ok(())
}

/// Regular files, plus unfollowed links that do not lead to a directory
///
/// A dangling link counts as a file: removing it only removes the link.
fn is_candidate(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }

    match fs::metadata(entry.path()) {
        Ok(target) => !target.is_dir(),
        Err(e) => {
            log::debug!("Dangling link {}: {e}", entry.path().display());
            true
        }
    }
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
