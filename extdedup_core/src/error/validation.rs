//! Validation related error types

use thiserror::Error;

/// Input and configuration errors, raised before the filesystem is touched
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Extension string cannot match any file name
    #[error("Invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    /// Preferred and default extension are the same
    #[error("Preferred and default extension are both '{extension}'")]
    IdenticalExtensions { extension: String },

    /// Exclude glob failed to compile
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create an invalid extension error
    pub fn invalid_extension(extension: &str, reason: &str) -> Self {
        Self::InvalidExtension {
            extension: extension.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extension_error() {
        let error = ValidationError::invalid_extension(".png", "drop the leading dot");
        assert!(error.to_string().contains("Invalid extension"));
        assert!(error.to_string().contains(".png"));
        assert!(error.to_string().contains("drop the leading dot"));
    }

    #[test]
    fn test_identical_extensions_error() {
        let error = ValidationError::IdenticalExtensions {
            extension: "jpg".to_string(),
        };
        assert!(error.to_string().contains("both 'jpg'"));
    }

    #[test]
    fn test_invalid_configuration_error() {
        let error = ValidationError::invalid_configuration("max_depth must be at least 1");
        assert!(error.to_string().contains("Invalid configuration"));
        assert!(error.to_string().contains("max_depth"));
    }
}
