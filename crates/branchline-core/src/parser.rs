//! Record parser for `git log --name-only` output.

use branchline_commit::{CommitRecord, HASH_LEN};
use branchline_git::FIELD_SEPARATOR;
use tracing::{debug, info, warn};

use crate::normalize_timestamp;

/// Splits raw log text into [`CommitRecord`]s.
///
/// The text is a sequence of header lines (`hash SEP date SEP subject SEP refs`),
/// each followed by the paths it touched, one per line.
#[derive(Debug, Clone)]
pub struct RecordParser {
    separator: String,
}

impl RecordParser {
    /// Creates a parser for the given field separator.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Returns the field separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns `true` if `line` starts a new commit.
    ///
    /// A header carries the separator and its first field is exactly one
    /// hash long. Path lines may contain anything, so both are required.
    #[must_use]
    pub fn is_header(&self, line: &str) -> bool {
        line.split_once(self.separator.as_str())
            .is_some_and(|(hash, _)| hash.chars().count() == HASH_LEN)
    }

    /// Parses the whole log.
    ///
    /// Malformed headers and headers with unparseable dates are dropped
    /// together with their path lines. Records come back in log order.
    pub fn parse(&self, text: &str) -> Vec<CommitRecord> {
        let mut records = Vec::new();
        let mut current: Option<CommitRecord> = None;
        let mut dropped = 0usize;

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            if self.is_header(line) {
                records.extend(current.take());
                current = self.parse_header(line);
                if current.is_none() {
                    dropped += 1;
                }
                continue;
            }

            match current.as_mut() {
                Some(record) => record.files.push(line.to_string()),
                None => debug!(line, "ignoring path line without a commit"),
            }
        }
        records.extend(current);

        info!(count = records.len(), dropped, "parsed commit records");
        records
    }

    fn parse_header(&self, line: &str) -> Option<CommitRecord> {
        let fields: Vec<&str> = line.split(self.separator.as_str()).collect();

        let [hash, date, message, rest @ ..] = fields.as_slice() else {
            debug!(line, fields = fields.len(), "skipping malformed header");
            return None;
        };

        let timestamp = match normalize_timestamp(date) {
            Ok(timestamp) => timestamp,
            Err(error) => {
                warn!(
                    hash = %hash,
                    timestamp = %date,
                    %error,
                    "skipping commit with unparseable timestamp"
                );
                return None;
            }
        };

        let refs = rest.first().copied().unwrap_or_default();
        Some(CommitRecord::new(*hash, timestamp, *message, refs))
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(FIELD_SEPARATOR)
    }
}

/// Parses `text` with the given separator.
///
/// Shorthand for `RecordParser::new(separator).parse(text)`.
pub fn parse_records(text: &str, separator: &str) -> Vec<CommitRecord> {
    RecordParser::new(separator).parse(text)
}
