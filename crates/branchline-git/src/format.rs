//! `git log` output format.
//!
//! Each commit is printed as one header line
//! `%H SEP %ai SEP %s SEP %D`, followed by the touched paths
//! (`--name-only`), one per line.

pub use branchline_commit::FIELD_SEPARATOR;

/// Builds the `--pretty` format string for the given separator.
#[must_use]
pub fn pretty_format(separator: &str) -> String {
    ["%H", "%ai", "%s", "%D"].join(separator)
}

/// Builds the full argument list passed to `git`.
#[must_use]
pub fn log_args(separator: &str) -> Vec<String> {
    vec![
        "log".to_string(),
        "--all".to_string(),
        format!("--pretty=format:{}", pretty_format(separator)),
        "--name-only".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_format_default_separator() {
        assert_eq!(pretty_format(FIELD_SEPARATOR), "%H∞%ai∞%s∞%D");
    }

    #[test]
    fn test_pretty_format_custom_separator() {
        assert_eq!(pretty_format("|~|"), "%H|~|%ai|~|%s|~|%D");
    }

    #[test]
    fn test_log_args() {
        let args = log_args(FIELD_SEPARATOR);
        assert_eq!(
            args,
            vec![
                "log",
                "--all",
                "--pretty=format:%H∞%ai∞%s∞%D",
                "--name-only"
            ]
        );
    }
}
