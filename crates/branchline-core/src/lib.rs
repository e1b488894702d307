//! Core library for Branchline.
//!
//! This crate turns raw `git log` text into a branch-annotated timeline:
//! timestamps are normalized, records parsed, branches attributed and the
//! result rendered as a plain-text report.

mod attribution;
mod error;
mod parser;
mod pipeline;
mod refs;
mod render;
mod timestamp;

pub use attribution::{AttributionSettings, BranchAttributor};
pub use error::{CoreError, CoreResult};
pub use parser::{RecordParser, parse_records};
pub use pipeline::{Timeline, write_report};
pub use refs::{branch_from_merge_message, branch_from_refs};
pub use render::{EMPTY_REPORT, render_timeline};
pub use timestamp::{TimestampError, normalize_timestamp};
