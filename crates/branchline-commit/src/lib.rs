//! Commit types for Branchline.
//!
//! This crate provides the record types shared by every stage of the timeline:
//! - [`CommitRecord`]: A commit as parsed from the log, plus its attributed branch
//! - [`BranchPeriod`]: The merge instant of a feature branch, used during attribution

mod period;
mod record;

pub use period::BranchPeriod;
pub use record::{CommitRecord, FIELD_SEPARATOR, HASH_LEN, TRUNK_BRANCH};
