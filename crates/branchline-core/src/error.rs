//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] branchline_git::GitError),

    /// The report could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_display() {
        let err = CoreError::Write {
            path: PathBuf::from("/ro/commit-timeline.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot write /ro/commit-timeline.txt: denied");
    }

    #[test]
    fn test_git_display() {
        let err = CoreError::from(branchline_git::GitError::NotARepo(PathBuf::from("/tmp/x")));
        assert_eq!(err.to_string(), "git error: not a git repository: /tmp/x");
    }
}
