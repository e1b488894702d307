//! Plain-text timeline report.

use branchline_commit::CommitRecord;
use chrono::{DateTime, Utc};

/// Report produced when there is nothing to show.
pub const EMPTY_REPORT: &str = "No commits found";

/// Renders records as a chronological timeline.
///
/// Each entry looks like:
///
/// ```text
/// time: 01:30  (+45 mins)
/// commit: <hash> [MERGE]
/// branch: <branch>
///
/// <message>
///
///   <path>
///
/// ```
///
/// The first entry always shows `time: 00:00`. Elapsed time is measured from
/// the earliest commit, the delta from the previous one; both are truncated
/// to whole minutes.
pub fn render_timeline(records: &[CommitRecord]) -> String {
    let mut sorted: Vec<&CommitRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.timestamp);

    let Some(first) = sorted.first() else {
        return EMPTY_REPORT.to_string();
    };

    let start = first.timestamp;
    let mut previous = start;
    let mut lines = Vec::new();

    for (index, record) in sorted.iter().enumerate() {
        lines.push(time_line(index, start, previous, record.timestamp));

        let flag = if record.mentions_merge() { " [MERGE]" } else { "" };
        lines.push(format!("commit: {}{flag}", record.hash));
        lines.push(format!("branch: {}", record.branch));
        lines.push(String::new());
        lines.push(record.message.clone());
        lines.push(String::new());
        lines.extend(record.files.iter().map(|file| format!("  {file}")));
        lines.push(String::new());

        previous = record.timestamp;
    }

    lines.join("\n")
}

fn time_line(
    index: usize,
    start: DateTime<Utc>,
    previous: DateTime<Utc>,
    current: DateTime<Utc>,
) -> String {
    if index == 0 {
        return "time: 00:00".to_string();
    }

    let elapsed = current - start;
    let delta = current - previous;
    format!(
        "time: {:02}:{:02}  (+{} mins)",
        elapsed.num_hours(),
        elapsed.num_minutes() % 60,
        delta.num_minutes()
    )
}
