//! File-based configuration loading

use super::model::Config;
use crate::error::{CodeShackError, CodeShackResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// A missing file yields an unset config so it overrides nothing.
pub fn load_from_file(path: &Path) -> CodeShackResult<Config> {
    if !path.exists() {
        tracing::debug!("Config file not found, skipping: {}", path.display());
        return Ok(Config::unset());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        CodeShackError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            CodeShackError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            CodeShackError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            CodeShackError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

/// Write a configuration file, picking the format from the extension
pub fn save_to_file(config: &Config, path: &Path) -> CodeShackResult<()> {
    let content = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::to_string_pretty(config)?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)?,
        _ => serde_json::to_string_pretty(config)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| {
                CodeShackError::io_with_path(e.to_string(), parent.display().to_string())
            })?;
    }

    fs::write(path, content)
        .map_err(|e| CodeShackError::io_with_path(e.to_string(), path.display().to_string()))
}
