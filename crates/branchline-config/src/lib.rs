//! Configuration management for Branchline.
//!
//! This crate handles loading and validating the `branchline.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default};
pub use schema::{
    AttributionConfig, Config, DEFAULT_IGNORED_PATTERNS, DEFAULT_WINDOW_MINUTES, LogConfig,
    OutputConfig,
};
