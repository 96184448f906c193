use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the change utility
#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("Usage: {program} <filename> <string_to_replace> <replacement>")]
    Usage { program: String },

    #[error("Error reading file: {source}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Error writing file: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Error preparing search: {message}")]
    Pattern { message: String },
}

impl ChangeError {
    /// Create a usage error naming the invoked program
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage {
            program: program.into(),
        }
    }

    /// Create a new read error with path context
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new pattern error
    pub fn pattern_error(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Path of the file involved, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChangeError::Read { path, .. } | ChangeError::Write { path, .. } => {
                Some(path.as_path())
            }
            ChangeError::Usage { .. } | ChangeError::Pattern { .. } => None,
        }
    }
}

impl From<regex::Error> for ChangeError {
    fn from(error: regex::Error) -> Self {
        ChangeError::pattern_error(error.to_string())
    }
}

/// Result type alias using ChangeError
pub type ChangeResult<T> = Result<T, ChangeError>;

/// Contextual error mapping for reads
pub fn map_read_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> ChangeError {
    let path = path.into();
    move |err| ChangeError::read_error(err, path)
}

/// Contextual error mapping for writes
pub fn map_write_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> ChangeError {
    let path = path.into();
    move |err| ChangeError::write_error(err, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_usage_message() {
        let err = ChangeError::usage("change");
        assert_eq!(
            err.to_string(),
            "Usage: change <filename> <string_to_replace> <replacement>"
        );
        assert!(err.path().is_none());
    }

    #[test]
    fn test_io_errors_surface_detail() {
        let err = map_read_err("missing.txt")(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert_eq!(err.to_string(), "Error reading file: No such file or directory");
        assert_eq!(err.path(), Some(Path::new("missing.txt")));

        let err = map_write_err("locked.txt")(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Permission denied",
        ));
        assert_eq!(err.to_string(), "Error writing file: Permission denied");
        assert_eq!(err.path(), Some(Path::new("locked.txt")));
    }
}
