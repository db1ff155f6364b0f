//! Exclude filtering using glob patterns
//!
//! Patterns are matched against paths relative to the scan root. A directory
//! that matches is pruned together with everything below it.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use crate::error::{Result, ValidationError};

/// Compiled set of exclude globs
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    /// Compiled glob set for matching
    globset: GlobSet,
    /// Original patterns, kept for logging
    patterns: Vec<String>,
}

impl ExcludeFilter {
    /// Compile exclude patterns; an empty list excludes nothing
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| ValidationError::InvalidPattern(format!("{pattern}: {e}")))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            globset,
            patterns: patterns.to_vec(),
        })
    }

    /// Check whether a root-relative path is excluded
    pub fn is_excluded(&self, relative: &Path) -> bool {
        !self.patterns.is_empty() && self.globset.is_match(relative)
    }

    /// Get the original patterns
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_patterns_excludes_nothing() {
        let filter = ExcludeFilter::new(&[]).unwrap();

        assert!(!filter.is_excluded(Path::new("a.png")));
        assert!(!filter.is_excluded(Path::new("any/path/file.jpg")));
        assert!(filter.patterns().is_empty());
    }

    #[test]
    fn test_file_pattern() {
        let filter = ExcludeFilter::new(&["*.bak.jpg".to_string()]).unwrap();

        assert!(filter.is_excluded(Path::new("photo.bak.jpg")));
        assert!(!filter.is_excluded(Path::new("photo.jpg")));
    }

    #[test]
    fn test_directory_pattern() {
        let filter = ExcludeFilter::new(&["archive".to_string(), "**/.git".to_string()]).unwrap();

        assert!(filter.is_excluded(Path::new("archive")));
        assert!(filter.is_excluded(Path::new("nested/.git")));
        assert!(!filter.is_excluded(Path::new("archived")));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ExcludeFilter::new(&["[unclosed".to_string()]).unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("[unclosed"));
    }
}
