//! Configuration schema.

use branchline_commit::{FIELD_SEPARATOR, TRUNK_BRANCH};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Default attribution window, in minutes.
pub const DEFAULT_WINDOW_MINUTES: u32 = 120;

/// Merged branches matching these substrings are not project work.
pub const DEFAULT_IGNORED_PATTERNS: &[&str] = &["cursor/", "integrate-checklists"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log input configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Branch attribution configuration.
    #[serde(default)]
    pub attribution: AttributionConfig,

    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Checks values that parse fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log.separator.is_empty() {
            return Err(ConfigError::Invalid("log.separator must not be empty".into()));
        }
        if self.log.separator.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(
                "log.separator must not contain line breaks".into(),
            ));
        }
        if self.attribution.trunk.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "attribution.trunk must not be empty".into(),
            ));
        }
        if self.output.file.trim().is_empty() {
            return Err(ConfigError::Invalid("output.file must not be empty".into()));
        }
        Ok(())
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Log input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Field separator used in the `git log` pretty format.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    FIELD_SEPARATOR.to_string()
}

/// Branch attribution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionConfig {
    /// Branch assigned when no other signal applies.
    #[serde(default = "default_trunk")]
    pub trunk: String,

    /// How far before a merge a commit may be and still belong to it.
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u32,

    /// Merged branches containing any of these substrings are never
    /// attributed by time window.
    #[serde(default = "default_ignored_patterns")]
    pub ignored_patterns: Vec<String>,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            trunk: default_trunk(),
            window_minutes: default_window_minutes(),
            ignored_patterns: default_ignored_patterns(),
        }
    }
}

fn default_trunk() -> String {
    TRUNK_BRANCH.to_string()
}

fn default_window_minutes() -> u32 {
    DEFAULT_WINDOW_MINUTES
}

fn default_ignored_patterns() -> Vec<String> {
    DEFAULT_IGNORED_PATTERNS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path.
    #[serde(default = "default_output_file")]
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}

fn default_output_file() -> String {
    "commit-timeline.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.separator, "∞");
        assert_eq!(config.attribution.trunk, "main");
        assert_eq!(config.attribution.window_minutes, 120);
        assert_eq!(
            config.attribution.ignored_patterns,
            vec!["cursor/", "integrate-checklists"]
        );
        assert_eq!(config.output.file, "commit-timeline.txt");
    }

    #[test]
    fn test_defaults_follow_record_constants() {
        let config = Config::default();
        assert_eq!(config.log.separator, branchline_commit::FIELD_SEPARATOR);
        assert_eq!(config.attribution.trunk, branchline_commit::TRUNK_BRANCH);
        assert_eq!(config.attribution.window_minutes, DEFAULT_WINDOW_MINUTES);
        assert_eq!(config.attribution.ignored_patterns, DEFAULT_IGNORED_PATTERNS);
    }

    #[test]
    fn test_default_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [attribution]
            window_minutes = 30
        "#,
        )
        .unwrap();

        assert_eq!(config.attribution.window_minutes, 30);
        assert_eq!(config.attribution.trunk, "main");
        assert_eq!(config.attribution.ignored_patterns.len(), 2);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_empty_ignored_patterns_allowed() {
        let config: Config = toml::from_str(
            r"
            [attribution]
            ignored_patterns = []
        ",
        )
        .unwrap();

        assert!(config.attribution.ignored_patterns.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_separator() {
        let mut config = Config::default();
        config.log.separator = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log.separator"));
    }

    #[test]
    fn test_validate_newline_separator() {
        let mut config = Config::default();
        config.log.separator = "\n".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_trunk() {
        let mut config = Config::default();
        config.attribution.trunk = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("attribution.trunk"));
    }

    #[test]
    fn test_validate_empty_output() {
        let mut config = Config::default();
        config.output.file = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_toml_roundtrips() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[attribution]"));
        assert!(text.contains("[output]"));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
