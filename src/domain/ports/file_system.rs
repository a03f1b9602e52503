//! FileSystem port - abstraction over the file operations the pipeline needs
//!
//! The build and clean use cases only ever probe for paths, delete them, and
//! enumerate spec files; this trait keeps them testable against an in-memory
//! mock.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Path not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error against the path the operation targeted, so
    /// Display always names a real path.
    pub fn classify(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::Io(err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "path not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory mocks in use-case tests
pub trait FileSystem {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything under it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// List files directly under `dir` whose name ends with `suffix`.
    /// A missing directory yields an empty list.
    fn list_with_suffix(&self, dir: &Path, suffix: &str) -> FsResult<Vec<PathBuf>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("build"));
        assert!(err.to_string().contains("build"));
    }

    #[test]
    fn fs_error_from_io_is_untyped() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fs_err: FsError = io_err.into();
        assert!(matches!(fs_err, FsError::Io(_)));
    }

    #[test]
    fn classify_carries_the_real_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let fs_err = FsError::classify(Path::new("build"), io_err);
        match &fs_err {
            FsError::NotFound(path) => assert_eq!(path, Path::new("build")),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(fs_err.to_string(), "path not found: build");
    }
}
