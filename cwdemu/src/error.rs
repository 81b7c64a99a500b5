//! Error types for the cwdemu library.
//!
//! This module provides the error hierarchy for path resolution, directory
//! changes and configuration, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cwdemu error.
///
/// # Examples
///
/// ```
/// use cwdemu::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cwdemu library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be interpreted.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A non-directory was used as a directory while resolving a path.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The component that is not a directory.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// Too many symlinks were followed while resolving a path.
    #[error("symlink loop detected: {path}")]
    SymlinkLoop {
        /// The path being resolved when the limit was hit.
        path: String,
    },

    /// The mount root of the emulated filesystem is unusable.
    #[error("invalid mount root {}: {reason}", path.display())]
    InvalidMountRoot {
        /// The host directory that was requested as the mount root.
        path: PathBuf,
        /// The reason it cannot be used.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Changing the current directory failed.
    #[error(transparent)]
    Change(#[from] ChangeError),
}

/// Reason a directory change was refused.
///
/// The current directory is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The target reduced to an empty path.
    #[error("change directory failed: empty target path")]
    Empty,

    /// The target does not exist.
    #[error("{path}: no such directory")]
    NotFound {
        /// The composed target path.
        path: String,
    },

    /// The target exists but is not a directory.
    #[error("{path}: not a directory")]
    NotADirectory {
        /// The composed target path.
        path: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cwdemu::Error;
    ///
    /// let err = Error::PathNotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound { .. } | Self::Change(ChangeError::NotFound { .. })
        )
    }

    /// The raw OS error code carried by this error, if any.
    #[must_use]
    pub fn os_error(&self) -> Option<i32> {
        match self {
            Self::Io(e) => e.raw_os_error(),
            _ => None,
        }
    }
}
