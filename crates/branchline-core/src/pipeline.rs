//! End-to-end timeline generation.

use std::path::Path;

use branchline_commit::CommitRecord;
use branchline_config::Config;
use branchline_git::LogSource;
use tracing::{debug, error, info};

use crate::{
    AttributionSettings, BranchAttributor, CoreError, CoreResult, RecordParser, render_timeline,
};

/// Runs log text through parsing, attribution and rendering.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    parser: RecordParser,
    attributor: BranchAttributor,
}

impl Timeline {
    /// Creates a timeline from its stages.
    #[must_use]
    pub fn new(parser: RecordParser, attributor: BranchAttributor) -> Self {
        Self { parser, attributor }
    }

    /// Creates a timeline configured from `branchline.toml` settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RecordParser::new(config.log.separator.as_str()),
            BranchAttributor::new(AttributionSettings::from(&config.attribution)),
        )
    }

    /// Returns the record parser.
    #[must_use]
    pub fn parser(&self) -> &RecordParser {
        &self.parser
    }

    /// Returns the branch attributor.
    #[must_use]
    pub fn attributor(&self) -> &BranchAttributor {
        &self.attributor
    }

    /// Parses and attributes `text`.
    pub fn records_from_text(&self, text: &str) -> Vec<CommitRecord> {
        let mut records = self.parser.parse(text);
        self.attributor.attribute(&mut records);
        records
    }

    /// Reads the log from `source`, then parses and attributes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    pub fn try_records<S: LogSource + ?Sized>(&self, source: &S) -> CoreResult<Vec<CommitRecord>> {
        let text = source.read()?;
        Ok(self.records_from_text(&text))
    }

    /// Like [`try_records`](Self::try_records), but a source failure is
    /// logged and treated as an empty log.
    pub fn records<S: LogSource + ?Sized>(&self, source: &S) -> Vec<CommitRecord> {
        self.try_records(source).unwrap_or_else(|e| {
            error!(error = %e, "failed to read commit log, continuing without commits");
            Vec::new()
        })
    }

    /// Produces the report for `source`.
    ///
    /// Never fails: an unreadable source renders as "No commits found".
    pub fn render<S: LogSource + ?Sized>(&self, source: &S) -> String {
        let records = self.records(source);
        info!(count = records.len(), "rendering timeline");
        render_timeline(&records)
    }
}

/// Writes `report` to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`CoreError::Write`] if the file cannot be written.
pub fn write_report(path: impl AsRef<Path>, report: &str) -> CoreResult<()> {
    let path = path.as_ref();
    debug!(?path, bytes = report.len(), "writing report");
    std::fs::write(path, report).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
