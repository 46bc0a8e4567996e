//! Logging configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: String,
    /// Log format (json, pretty, compact)
    #[serde(default)]
    pub format: String,
    /// Log file path; logs go to stderr when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// A logging config that overrides nothing when merged
    pub fn unset() -> Self {
        Self {
            level: String::new(),
            format: String::new(),
            log_file: None,
        }
    }

    /// Merge with another logging config
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }

        if !other.format.is_empty() {
            self.format = other.format;
        }

        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
    }
}
