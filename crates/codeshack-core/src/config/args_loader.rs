//! Command-line override loading

use super::model::Config;
use crate::error::{CodeShackError, CodeShackResult};
use std::collections::HashMap;

/// Build a config from `key -> value` overrides collected by the CLI
///
/// Recognized keys: `api_url`, `connect_timeout`, `request_timeout`,
/// `id_token`, `log_level`, `log_format`.
pub fn load_from_args(args: &HashMap<String, String>) -> CodeShackResult<Config> {
    let mut config = Config::unset();

    for (key, value) in args {
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "api_url" => config.api_url = value.clone(),
            "connect_timeout" => config.connect_timeout_secs = Some(parse_secs(key, value)?),
            "request_timeout" => config.request_timeout_secs = Some(parse_secs(key, value)?),
            "id_token" => config.identity.id_token = Some(value.clone()),
            "log_level" => config.logging.level = value.clone(),
            "log_format" => config.logging.format = value.clone(),
            other => {
                tracing::debug!("Ignoring unknown config override: {}", other);
            }
        }
    }

    Ok(config)
}

fn parse_secs(key: &str, value: &str) -> CodeShackResult<u64> {
    value.parse().map_err(|_| {
        CodeShackError::invalid_field(key, format!("'{}' is not a number of seconds", value))
    })
}
