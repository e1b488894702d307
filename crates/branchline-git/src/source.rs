//! Sources of raw log text.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{FIELD_SEPARATOR, GitResult, Repository};

/// Supplies the raw text a timeline is built from.
pub trait LogSource {
    /// Reads the whole log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be obtained.
    fn read(&self) -> GitResult<String>;
}

impl LogSource for str {
    fn read(&self) -> GitResult<String> {
        Ok(self.to_string())
    }
}

impl LogSource for String {
    fn read(&self) -> GitResult<String> {
        Ok(self.clone())
    }
}

/// Runs `git log --all` in the repository containing `path`.
#[derive(Debug, Clone)]
pub struct GitLog {
    path: PathBuf,
    separator: String,
}

impl GitLog {
    /// Creates a source for the repository containing `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: FIELD_SEPARATOR.to_string(),
        }
    }

    /// Sets the field separator used in the pretty format.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns the configured separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl LogSource for GitLog {
    fn read(&self) -> GitResult<String> {
        let repo = Repository::discover(&self.path)?;
        if repo.is_empty() {
            debug!(path = ?repo.path(), "repository has no commits yet");
            return Ok(String::new());
        }

        let text = repo.log_text(&self.separator)?;
        info!(path = ?repo.path(), bytes = text.len(), "read git log");
        Ok(text)
    }
}

/// Log text captured earlier into a file.
#[derive(Debug, Clone)]
pub struct CapturedLog {
    path: PathBuf,
}

impl CapturedLog {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for CapturedLog {
    fn read(&self) -> GitResult<String> {
        debug!(path = ?self.path, "reading captured log");
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GitError;
    use tempfile::TempDir;

    #[test]
    fn test_str_source() {
        let text = "abc";
        assert_eq!(text.read().unwrap(), "abc");
    }

    #[test]
    fn test_string_source() {
        let text = String::from("line one\nline two");
        assert_eq!(text.read().unwrap(), "line one\nline two");
    }

    #[test]
    fn test_git_log_default_separator() {
        let source = GitLog::new(".");
        assert_eq!(source.separator(), FIELD_SEPARATOR);
        assert_eq!(source.with_separator("|").separator(), "|");
    }

    #[test]
    fn test_git_log_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        let result = GitLog::new(temp_dir.path()).read();
        assert!(matches!(result, Err(GitError::NotARepo(_))));
    }

    #[test]
    fn test_git_log_unborn_repository_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();

        let text = GitLog::new(temp_dir.path()).read().unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_captured_log_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        std::fs::write(&path, "captured").unwrap();

        let source = CapturedLog::new(&path);
        assert_eq!(source.path(), path);
        assert_eq!(source.read().unwrap(), "captured");
    }

    #[test]
    fn test_captured_log_missing_file() {
        let result = CapturedLog::new("/nonexistent/log.txt").read();
        assert!(matches!(result, Err(GitError::Io(_))));
    }
}
