//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// Bare repository, nothing to run `git log` in.
    #[error("repository has no working directory: {0}")]
    Bare(std::path::PathBuf),

    /// `git` could not be started.
    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// `git` exited with a failure status.
    #[error("git log failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_command_failed_display() {
        let err = GitError::CommandFailed {
            status: "exit status: 128".to_string(),
            stderr: "fatal: bad revision".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git log failed (exit status: 128): fatal: bad revision"
        );
    }

    #[test]
    fn test_spawn_display() {
        let err = GitError::Spawn(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(err.to_string(), "failed to run git: no such file");
    }

    #[test]
    fn test_error_is_debug() {
        let err = GitError::Bare(PathBuf::from("/tmp/bare.git"));
        let debug = format!("{err:?}");
        assert!(debug.contains("Bare"));
    }
}
