use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an input file into a
/// [`LineMultiset`](crate::LineMultiset).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The supplied path does not resolve to an existing file.
    #[error("file '{}' does not exist", .path.display())]
    PathNotFound {
        /// The path that failed to resolve.
        path: PathBuf,
    },
    /// The file exists but could not be read from disk.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying io failure.
        source: io::Error,
    },
}

impl LoadError {
    /// Returns the path the failed load was attempting to open.
    ///
    /// ```
    /// # use std::path::Path;
    /// let err = ldiff_core::load(Path::new("no/such/file")).unwrap_err();
    /// assert_eq!(err.path(), Path::new("no/such/file"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PathNotFound { path } | Self::Read { path, .. } => path,
        }
    }
}
