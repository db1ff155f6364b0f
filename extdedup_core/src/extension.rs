//! Tracked file extensions
//!
//! An [`ExtensionPair`] names the two extensions the tool cares about: the
//! preferred one, whose file survives, and the default one, whose file is
//! removed when a preferred sibling exists. Matching is exact byte equality
//! against [`Path::extension`](std::path::Path::extension); case is never
//! normalized.

use std::ffi::OsStr;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// A validated extension, stored without a leading dot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    /// Validate an extension given on the command line
    ///
    /// The value is taken verbatim: `"png"` and `"PNG"` are different
    /// extensions, and `".png"` is rejected rather than trimmed because it
    /// could never equal the extension of any file.
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ValidationError::invalid_extension(value, "must not be empty").into());
        }

        if value.contains('/') || value.contains('\\') {
            return Err(ValidationError::invalid_extension(
                value,
                "must not contain a path separator",
            )
            .into());
        }

        if value.starts_with('.') {
            let reason = if value.chars().all(|c| c == '.') {
                "must contain more than dots".to_string()
            } else {
                format!("drop the leading dot, use '{}'", value.trim_start_matches('.'))
            };
            return Err(ValidationError::invalid_extension(value, &reason).into());
        }

        if value.contains('.') {
            return Err(ValidationError::invalid_extension(
                value,
                "only the part after the last dot of a file name is compared",
            )
            .into());
        }

        Ok(Self(value.to_string()))
    }

    /// The extension text, without a dot
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a file extension as returned by `Path::extension` equals this one
    pub fn matches(&self, ext: &OsStr) -> bool {
        ext.as_encoded_bytes() == self.0.as_bytes()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two tracked extensions a file carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracked {
    Preferred,
    Default,
}

/// The preferred/default extension pair driving a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPair {
    preferred: Extension,
    default: Extension,
}

impl ExtensionPair {
    /// Build a pair; both extensions must differ
    pub fn new(preferred: Extension, default: Extension) -> Result<Self> {
        if preferred == default {
            return Err(ValidationError::IdenticalExtensions {
                extension: preferred.0,
            }
            .into());
        }

        Ok(Self { preferred, default })
    }

    /// Parse and validate both extensions in one go
    pub fn parse(preferred: &str, default: &str) -> Result<Self> {
        Self::new(Extension::parse(preferred)?, Extension::parse(default)?)
    }

    pub fn preferred(&self) -> &Extension {
        &self.preferred
    }

    pub fn default(&self) -> &Extension {
        &self.default
    }

    /// Extension text for a tracked side
    pub fn get(&self, tracked: Tracked) -> &Extension {
        match tracked {
            Tracked::Preferred => &self.preferred,
            Tracked::Default => &self.default,
        }
    }

    /// Classify a raw file extension; `None` for anything untracked
    pub fn classify_ext(&self, ext: &OsStr) -> Option<Tracked> {
        if self.preferred.matches(ext) {
            Some(Tracked::Preferred)
        } else if self.default.matches(ext) {
            Some(Tracked::Default)
        } else {
            None
        }
    }
}
