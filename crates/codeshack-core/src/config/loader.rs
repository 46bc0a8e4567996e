//! Configuration loading from multiple sources
//!
//! Sources are merged in the order they are added; later sources override
//! earlier ones, and unset values never override anything.

use super::args_loader;
use super::env_loader;
use super::file_loader;
use super::model::Config;
use crate::error::CodeShackResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "codeshack.json";

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file
    File(PathBuf),
    /// Configuration from environment variables (and a `.env` file)
    Environment,
    /// Configuration from command line arguments
    CommandLine(HashMap<String, String>),
    /// Default configuration
    Default,
}

/// Configuration loader with support for multiple sources
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add command line arguments source
    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> CodeShackResult<Config> {
        let mut config = Config::unset();

        for source in &self.sources {
            config.merge(load_from_source(source)?);
        }

        config.validate()?;
        tracing::debug!("Resolved API base: {}", config.api_url);
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_from_source(source: &ConfigSource) -> CodeShackResult<Config> {
    match source {
        ConfigSource::File(path) => {
            tracing::debug!("Loading config from file: {}", path.display());
            file_loader::load_from_file(path)
        }
        ConfigSource::Environment => {
            tracing::debug!("Loading config from environment");
            if let Ok(path) = dotenv::dotenv() {
                tracing::debug!("Loaded .env from {}", path.display());
            }
            env_loader::load_from_env()
        }
        ConfigSource::CommandLine(args) => {
            tracing::debug!("Loading config from command line");
            args_loader::load_from_args(args)
        }
        ConfigSource::Default => Ok(Config::default()),
    }
}

/// Load configuration from the default sources
pub fn load_config() -> CodeShackResult<Config> {
    load_config_with_overrides(None, HashMap::new())
}

/// Load configuration with an optional explicit file and command line overrides
///
/// Loads configuration in this order:
/// 1. Default configuration
/// 2. Config file (the given one, or `codeshack.json` and `~/.codeshack/config.json`)
/// 3. Environment variables
/// 4. Command line overrides
pub fn load_config_with_overrides(
    config_file: Option<&Path>,
    overrides: HashMap<String, String>,
) -> CodeShackResult<Config> {
    let mut loader = ConfigLoader::new().with_defaults();

    match config_file {
        Some(file) => loader = loader.with_file(file),
        None => {
            let global = dirs::home_dir().map(|h| h.join(".codeshack").join("config.json"));
            if let Some(global) = global {
                loader = loader.with_file(global);
            }
            loader = loader.with_file(DEFAULT_CONFIG_FILE);
        }
    }

    loader.with_env().with_args(overrides).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigLoader::new().with_defaults().load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_then_args_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("codeshack.json");
        std::fs::write(
            &path,
            r#"{"api_url": "http://file.example.com/api/", "logging": {"level": "warn"}}"#,
        )
        .unwrap();

        let mut args = HashMap::new();
        args.insert("api_url".to_string(), "http://args.example.com/api/".to_string());

        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(&path)
            .with_args(args)
            .load()
            .unwrap();

        assert_eq!(config.api_url, "http://args.example.com/api/");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let config = ConfigLoader::new()
            .with_defaults()
            .with_file("/nonexistent/codeshack.toml")
            .load()
            .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_result_fails_validation() {
        let mut args = HashMap::new();
        args.insert("api_url".to_string(), "not a url".to_string());

        let result = ConfigLoader::new().with_defaults().with_args(args).load();
        assert!(result.is_err());
    }
}
