//! Configuration data model

use super::logging_config::LoggingConfig;
use super::timeouts;
use crate::error::{CodeShackError, CodeShackResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the REST API when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/";

/// Secure-token endpoint of the identity provider
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://securetoken.googleapis.com/v1/token";

/// Account (sign-in/sign-up) endpoint base of the identity provider
pub const DEFAULT_ACCOUNTS_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Client configuration
///
/// Fields left empty (or `None`) by a source never override what an earlier
/// source set; see [`Config::merge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API
    #[serde(default)]
    pub api_url: String,

    /// TCP connect timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Identity provider settings
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Logging settings
    #[serde(default = "LoggingConfig::unset")]
    pub logging: LoggingConfig,
}

/// Identity provider settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Secure-token endpoint used to exchange refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,

    /// Base of the password sign-in and sign-up endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts_endpoint: Option<String>,

    /// Public API key of the identity provider project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Fixed bearer token, mostly for scripting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Where signed-in credentials are stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            connect_timeout_secs: Some(timeouts::http::CONNECT_SECS),
            request_timeout_secs: Some(timeouts::http::REQUEST_SECS),
            identity: IdentityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// An empty config that overrides nothing when merged
    pub fn unset() -> Self {
        Self {
            api_url: String::new(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            identity: IdentityConfig::default(),
            logging: LoggingConfig::unset(),
        }
    }

    /// Merge with another config; set values in `other` win
    pub fn merge(&mut self, other: Config) {
        if !other.api_url.is_empty() {
            self.api_url = other.api_url;
        }
        if other.connect_timeout_secs.is_some() {
            self.connect_timeout_secs = other.connect_timeout_secs;
        }
        if other.request_timeout_secs.is_some() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        self.identity.merge(other.identity);
        self.logging.merge(other.logging);
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodeShackResult<()> {
        self.api_base()?;

        for (name, value) in [
            ("connect_timeout_secs", self.connect_timeout_secs),
            ("request_timeout_secs", self.request_timeout_secs),
        ] {
            if value == Some(0) {
                return Err(CodeShackError::config_with_context(
                    format!("{} must be greater than zero", name),
                    "Validating timeouts",
                ));
            }
        }

        for endpoint in [
            &self.identity.token_endpoint,
            &self.identity.accounts_endpoint,
        ]
        .into_iter()
        .flatten()
        {
            Url::parse(endpoint).map_err(|e| {
                CodeShackError::config(format!("Invalid identity endpoint '{}': {}", endpoint, e))
            })?;
        }

        Ok(())
    }

    /// Parsed API base URL, always ending in `/` so relative paths join under it
    pub fn api_base(&self) -> CodeShackResult<Url> {
        let raw = if self.api_url.is_empty() {
            DEFAULT_API_URL
        } else {
            self.api_url.as_str()
        };
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };

        let url = Url::parse(&normalized).map_err(|e| {
            CodeShackError::config_with_context(
                format!("Invalid API URL '{}': {}", raw, e),
                "Parsing api_url",
            )
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CodeShackError::config(format!(
                "API URL must use http or https, got '{}'",
                other
            ))),
        }
    }

    /// Connect timeout, falling back to the default
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(timeouts::http::CONNECT_SECS),
        )
    }

    /// Request timeout, falling back to the default
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(timeouts::http::REQUEST_SECS),
        )
    }
}

impl IdentityConfig {
    /// Merge with another identity config; set values in `other` win
    pub fn merge(&mut self, other: IdentityConfig) {
        if other.token_endpoint.is_some() {
            self.token_endpoint = other.token_endpoint;
        }
        if other.accounts_endpoint.is_some() {
            self.accounts_endpoint = other.accounts_endpoint;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.id_token.is_some() {
            self.id_token = other.id_token;
        }
        if other.credentials_file.is_some() {
            self.credentials_file = other.credentials_file;
        }
    }

    /// Token endpoint, falling back to the provider default
    pub fn token_endpoint(&self) -> &str {
        self.token_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_ENDPOINT)
    }

    /// Accounts endpoint base, falling back to the provider default
    pub fn accounts_endpoint(&self) -> &str {
        self.accounts_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ACCOUNTS_ENDPOINT)
            .trim_end_matches('/')
    }

    /// Credentials file, falling back to `~/.codeshack/credentials.json`
    pub fn credentials_path(&self) -> Option<PathBuf> {
        self.credentials_file.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join(".codeshack").join("credentials.json"))
        })
    }
}
