//! Environment variable-based configuration loading

use super::model::Config;
use crate::error::{CodeShackError, CodeShackResult};
use std::env;
use std::path::PathBuf;

/// Load configuration from `CODESHACK_*` environment variables
pub fn load_from_env() -> CodeShackResult<Config> {
    load_from_vars(|key| env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub(crate) fn load_from_vars<F>(lookup: F) -> CodeShackResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = Config::unset();

    if let Some(api_url) = var("CODESHACK_API_URL") {
        config.api_url = api_url;
    }

    config.connect_timeout_secs = parse_secs(
        var("CODESHACK_CONNECT_TIMEOUT"),
        "CODESHACK_CONNECT_TIMEOUT",
    )?;
    config.request_timeout_secs = parse_secs(
        var("CODESHACK_REQUEST_TIMEOUT"),
        "CODESHACK_REQUEST_TIMEOUT",
    )?;

    config.identity.token_endpoint = var("CODESHACK_TOKEN_ENDPOINT");
    config.identity.accounts_endpoint = var("CODESHACK_ACCOUNTS_ENDPOINT");
    config.identity.api_key = var("CODESHACK_API_KEY");
    config.identity.id_token = var("CODESHACK_ID_TOKEN");
    config.identity.credentials_file = var("CODESHACK_CREDENTIALS_FILE").map(PathBuf::from);

    if let Some(level) = var("CODESHACK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = var("CODESHACK_LOG_FORMAT") {
        config.logging.format = format;
    }
    config.logging.log_file = var("CODESHACK_LOG_FILE").map(PathBuf::from);

    Ok(config)
}

fn parse_secs(value: Option<String>, name: &str) -> CodeShackResult<Option<u64>> {
    value
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|_| {
                CodeShackError::config_with_context(
                    format!("Invalid {} value", name),
                    format!("Parsing '{}' as whole seconds", raw),
                )
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_reads_known_variables() {
        let env = vars(&[
            ("CODESHACK_API_URL", "https://api.example.com/api/"),
            ("CODESHACK_REQUEST_TIMEOUT", "15"),
            ("CODESHACK_ID_TOKEN", "tok"),
            ("CODESHACK_LOG_LEVEL", "trace"),
        ]);

        let config = load_from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/api/");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.connect_timeout_secs, None);
        assert_eq!(config.identity.id_token.as_deref(), Some("tok"));
        assert_eq!(config.logging.level, "trace");
        assert!(config.logging.format.is_empty());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let env = vars(&[("CODESHACK_API_URL", "  "), ("CODESHACK_API_KEY", "")]);

        let config = load_from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config, Config::unset());
    }

    #[test]
    fn test_invalid_timeout() {
        let env = vars(&[("CODESHACK_CONNECT_TIMEOUT", "soon")]);

        let err = load_from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("CODESHACK_CONNECT_TIMEOUT"));
    }
}
