//! Branch names from ref decorations and merge subjects.

use regex::Regex;
use std::sync::LazyLock;

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HEAD -> ([^,\s]+)").expect("invalid regex"));

static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"origin/([^,\s]+)").expect("invalid regex"));

static PULL_REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Merge pull request #\d+ from [^/]+/(.+)").expect("invalid regex")
});

static MERGE_BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Merge branch '([^']+)'").expect("invalid regex"));

/// Remote names that never identify a feature branch.
const REMOTE_SKIP: [&str; 3] = ["HEAD", "main", "master"];

/// Local tokens that never identify a feature branch.
const LOCAL_SKIP: [&str; 4] = ["", "refs/stash", "main", "master"];

/// Extracts a branch name from a `%D` ref decoration string.
///
/// Preference order:
/// 1. the branch `HEAD` points at,
/// 2. the first remote-tracking `origin/<name>` that is not a trunk,
/// 3. the first local, non-trunk token,
/// 4. `main`, then `master`, if mentioned at all.
///
/// Returns `None` when nothing matches, including for an empty string.
pub fn branch_from_refs(refs: &str) -> Option<String> {
    let refs = refs.trim();
    if refs.is_empty() {
        return None;
    }

    if let Some(caps) = HEAD_RE.captures(refs) {
        return Some(caps[1].to_string());
    }

    if let Some(name) = ORIGIN_RE
        .captures_iter(refs)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .find(|name| !REMOTE_SKIP.contains(name))
    {
        return Some(name.to_string());
    }

    if let Some(token) = refs
        .split(',')
        .map(str::trim)
        .find(|token| !token.starts_with("origin/") && !LOCAL_SKIP.contains(token))
    {
        return Some(token.to_string());
    }

    ["main", "master"]
        .into_iter()
        .find(|trunk| refs.contains(trunk))
        .map(String::from)
}

/// Extracts the merged branch from a merge commit subject.
///
/// Understands GitHub's `Merge pull request #N from owner/branch` and git's
/// `Merge branch 'branch'`. Only the first matching form is consulted; an
/// empty capture yields `None`.
pub fn branch_from_merge_message(message: &str) -> Option<String> {
    let caps = PULL_REQUEST_RE
        .captures(message)
        .or_else(|| MERGE_BRANCH_RE.captures(message))?;
    let branch = caps.get(1)?.as_str().trim();
    (!branch.is_empty()).then(|| branch.to_string())
}
