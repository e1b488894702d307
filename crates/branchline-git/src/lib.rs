//! Git abstraction layer for Branchline.
//!
//! This crate supplies the raw log text the timeline is built from:
//! - Repository discovery
//! - `git log` invocation with a parseable pretty format
//! - The [`LogSource`] seam, so callers can feed captured text instead

mod error;
mod format;
mod repository;
mod source;

pub use error::{GitError, GitResult};
pub use format::{FIELD_SEPARATOR, log_args, pretty_format};
pub use repository::Repository;
pub use source::{CapturedLog, GitLog, LogSource};
