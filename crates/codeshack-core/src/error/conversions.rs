//! From trait implementations for CodeShackError conversions

use super::types::CodeShackError;

impl From<std::io::Error> for CodeShackError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for CodeShackError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<toml::de::Error> for CodeShackError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("TOML parse error: {}", error))
    }
}

impl From<toml::ser::Error> for CodeShackError {
    fn from(error: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialize error: {}", error))
    }
}

impl From<serde_yaml::Error> for CodeShackError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("YAML error: {}", error))
    }
}

impl From<reqwest::Error> for CodeShackError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let url = error.url().map(|u| u.to_string());
        Self::Http {
            message: error.to_string(),
            url,
            status_code,
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for CodeShackError {
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        Self::auth(format!("Token is not a valid header value: {}", error))
    }
}
