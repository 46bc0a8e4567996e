//! Core error type and context helpers

use thiserror::Error;

/// Result type alias for CodeShack operations
pub type CodeShackResult<T> = Result<T, CodeShackError>;

/// Main error type for CodeShack
#[derive(Error, Debug, Clone)]
pub enum CodeShackError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Identity provider and session errors
    #[error("Authentication error: {message}")]
    Auth {
        message: String,
        context: Option<String>,
    },

    /// HTTP request errors, including non-2xx responses
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
    },

    /// The first phase of a two-phase operation succeeded and a later one failed
    #[error("Partial failure: {message} (orphaned {resource_id}, rolled back: {rolled_back})")]
    PartialFailure {
        message: String,
        resource_id: String,
        rolled_back: bool,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl CodeShackError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CODESHACK_CONFIG",
            Self::Auth { .. } => "CODESHACK_AUTH",
            Self::Http { .. } => "CODESHACK_HTTP",
            Self::Json { .. } => "CODESHACK_JSON",
            Self::Io { .. } => "CODESHACK_IO",
            Self::InvalidInput { .. } => "CODESHACK_INVALID_INPUT",
            Self::NotFound { .. } => "CODESHACK_NOT_FOUND",
            Self::PartialFailure { .. } => "CODESHACK_PARTIAL_FAILURE",
            Self::Other { .. } => "CODESHACK_OTHER",
        }
    }

    /// HTTP status code, when the error came from a backend response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> CodeShackResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> CodeShackResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> CodeShackResult<T> {
        self.map_err(|e| CodeShackError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> CodeShackResult<T> {
        self.map_err(|e| CodeShackError::other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types
pub trait OptionExt<T> {
    /// Convert Option to Result with context message
    fn context<C: std::fmt::Display>(self, context: C) -> CodeShackResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context<C: std::fmt::Display>(self, context: C) -> CodeShackResult<T> {
        self.ok_or_else(|| CodeShackError::other(context.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "editor exited"));
        let err = result.context("Editor failed").unwrap_err();
        assert_eq!(err.error_code(), "CODESHACK_OTHER");
        assert!(err.to_string().contains("Editor failed: editor exited"));
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: Result<u8, String> = Ok(1);
        let value = ok.with_context(|| -> String { panic!("context built on success") });
        assert_eq!(value.unwrap(), 1);
    }

    #[test]
    fn test_option_context() {
        let err = None::<u8>.context("no user signed in").unwrap_err();
        assert!(err.to_string().contains("no user signed in"));
        assert_eq!(Some(3).context("unused").unwrap(), 3);
    }
}
