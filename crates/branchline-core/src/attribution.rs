//! Branch attribution.
//!
//! `git log` only decorates commits that a ref currently points at, so most
//! history carries no branch name at all. Attribution fills the gaps with
//! three signals, strongest first:
//!
//! 1. the commit's own ref decorations,
//! 2. for merge commits, trunk,
//! 3. otherwise the first merged branch whose merge happened at most
//!    `window` after the commit.

use branchline_commit::{BranchPeriod, CommitRecord};
use branchline_config::AttributionConfig;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::{branch_from_merge_message, branch_from_refs};

/// Tunable attribution parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionSettings {
    /// Branch for merge commits and anything left unattributed.
    pub trunk: String,

    /// Maximum gap between a commit and the merge it is attributed to.
    pub window: TimeDelta,

    /// Substrings that disqualify a merged branch as a window candidate.
    pub ignored_patterns: Vec<String>,
}

impl Default for AttributionSettings {
    fn default() -> Self {
        Self::from(&AttributionConfig::default())
    }
}

impl From<&AttributionConfig> for AttributionSettings {
    fn from(config: &AttributionConfig) -> Self {
        Self {
            trunk: config.trunk.clone(),
            window: TimeDelta::minutes(i64::from(config.window_minutes)),
            ignored_patterns: config.ignored_patterns.clone(),
        }
    }
}

/// Assigns a branch to every record.
#[derive(Debug, Clone, Default)]
pub struct BranchAttributor {
    settings: AttributionSettings,
}

impl BranchAttributor {
    /// Creates an attributor with the given settings.
    #[must_use]
    pub fn new(settings: AttributionSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn settings(&self) -> &AttributionSettings {
        &self.settings
    }

    /// Collects one [`BranchPeriod`] per merge commit whose subject names a
    /// branch, ordered by merge time (then hash, for ties).
    pub fn discover_periods(&self, records: &[CommitRecord]) -> Vec<BranchPeriod> {
        let mut periods: Vec<BranchPeriod> = records
            .iter()
            .filter(|record| record.is_merge())
            .filter_map(|record| {
                branch_from_merge_message(&record.message)
                    .map(|branch| BranchPeriod::new(branch, record.timestamp, &record.hash))
            })
            .collect();

        periods.sort_by(|a, b| {
            a.merge_time
                .cmp(&b.merge_time)
                .then_with(|| a.merge_hash.cmp(&b.merge_hash))
        });
        periods
    }

    /// Sets `branch` on every record.
    ///
    /// The result depends only on the set of records, not on their order.
    pub fn attribute(&self, records: &mut [CommitRecord]) {
        let periods = self.discover_periods(records);
        debug!(periods = periods.len(), "discovered merged branches");

        let mut by_window = 0usize;
        for record in records.iter_mut() {
            let branch = if let Some(branch) = branch_from_refs(&record.refs) {
                branch
            } else if record.is_merge() && branch_from_merge_message(&record.message).is_some() {
                self.settings.trunk.clone()
            } else if let Some(period) = self.period_for(record.timestamp, &periods) {
                by_window += 1;
                period.branch.clone()
            } else {
                self.settings.trunk.clone()
            };

            debug!(hash = %record.short_hash(), %branch, "attributed commit");
            record.branch = branch;
        }

        info!(count = records.len(), by_window, "attributed branches");
    }

    /// Returns the first eligible period whose merge follows `time` within
    /// the window.
    fn period_for<'a>(
        &self,
        time: DateTime<Utc>,
        periods: &'a [BranchPeriod],
    ) -> Option<&'a BranchPeriod> {
        periods
            .iter()
            .filter(|period| !self.is_ignored(&period.branch))
            .find(|period| period.covers(time, self.settings.window))
    }

    fn is_ignored(&self, branch: &str) -> bool {
        self.settings
            .ignored_patterns
            .iter()
            .any(|pattern| branch.contains(pattern.as_str()))
    }
}
