//! Git repository wrapper.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitError, GitResult, log_args};

/// A Git repository with a working directory.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Discovers the repository containing the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Self::from_git2(inner)
    }

    fn from_git2(inner: Git2Repo) -> GitResult<Self> {
        let workdir = inner
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::Bare(inner.path().to_path_buf()))?;
        Ok(Self { inner, workdir })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.workdir
    }

    /// Returns `true` if HEAD does not point at a commit yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty().unwrap_or(true)
    }

    /// Runs `git log --all` in the working directory and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started or exits unsuccessfully.
    pub fn log_text(&self, separator: &str) -> GitResult<String> {
        let args = log_args(separator);
        debug!(workdir = ?self.workdir, ?args, "running git log");

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.workdir)
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
