//! Branch life-window derived from a merge commit.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The instant a feature branch was merged, as recorded by its merge commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPeriod {
    /// Name of the merged branch.
    pub branch: String,

    /// Timestamp of the merge commit.
    pub merge_time: DateTime<Utc>,

    /// Hash of the merge commit.
    pub merge_hash: String,
}

impl BranchPeriod {
    /// Creates a new period.
    #[must_use]
    pub fn new(
        branch: impl Into<String>,
        merge_time: DateTime<Utc>,
        merge_hash: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            merge_time,
            merge_hash: merge_hash.into(),
        }
    }

    /// Returns `true` if `time` is at most `window` before the merge.
    ///
    /// The merge instant itself is inside; anything after it is not.
    #[must_use]
    pub fn covers(&self, time: DateTime<Utc>, window: Duration) -> bool {
        let gap = self.merge_time - time;
        gap >= Duration::zero() && gap <= window
    }
}
