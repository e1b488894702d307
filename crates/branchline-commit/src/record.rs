//! Commit record as parsed from the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of a full commit hash as printed by `git log`.
pub const HASH_LEN: usize = 40;

/// Separator between header fields. It does not show up in commit subjects
/// or ref names in practice.
pub const FIELD_SEPARATOR: &str = "\u{221e}";

/// Branch name assigned when nothing better is known.
pub const TRUNK_BRANCH: &str = "main";

/// A single history entry, parsed from one header line and its path lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (SHA).
    pub hash: String,

    /// The commit date, normalized to UTC.
    pub timestamp: DateTime<Utc>,

    /// The first line of the commit message.
    pub message: String,

    /// Raw, comma-separated ref decorations (may be empty).
    pub refs: String,

    /// Paths touched by the commit, in log order.
    pub files: Vec<String>,

    /// The attributed branch.
    pub branch: String,
}

impl CommitRecord {
    /// Creates a new record with no files, attributed to trunk.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        timestamp: DateTime<Utc>,
        message: impl Into<String>,
        refs: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            timestamp,
            message: message.into(),
            refs: refs.into(),
            files: Vec::new(),
            branch: TRUNK_BRANCH.to_string(),
        }
    }

    /// Sets the file list.
    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the message starts with `Merge` (case-sensitive).
    ///
    /// This is the check used to discover merge commits during attribution.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.message.starts_with("Merge")
    }

    /// Returns `true` if the message starts with `Merge` or mentions
    /// "merge" anywhere, ignoring case.
    ///
    /// Looser than [`is_merge`](Self::is_merge); used to flag entries in the
    /// rendered timeline.
    #[must_use]
    pub fn mentions_merge(&self) -> bool {
        self.is_merge() || self.message.to_lowercase().contains("merge")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}
