//! Error types for the extdedup core library
//!
//! Errors fall into two groups:
//! - I/O errors: the scan root cannot be opened or enumerated
//! - Validation errors: bad extensions, identical extension pair, bad globs

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the extdedup core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl Error {
    /// Whether this error came from user input rather than the filesystem
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::path::Path;

    #[test]
    fn test_root_not_found_error() {
        let path = Path::new("/does/not/exist");
        let error = Error::Io(IoError::not_found(path));

        match error {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::NotFound);
                assert_eq!(io_err.path, Some(path.to_path_buf()));
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_std_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();

        assert!(!error.is_validation());
        assert!(error.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error: Error = ValidationError::IdenticalExtensions {
            extension: "png".to_string(),
        }
        .into();

        assert!(error.is_validation());
        assert!(error.to_string().contains("png"));
    }

    #[test]
    fn test_source_chain_is_preserved() {
        let io_error = std::io::Error::other("disk on fire");
        let error = Error::Io(IoError::from_std(io_error).with_path(Path::new("/data")));

        let source = error.source().expect("transparent io error keeps its source");
        assert!(source.to_string().contains("disk on fire"));
    }
}
