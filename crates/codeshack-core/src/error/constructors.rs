//! Constructor methods for CodeShackError

use super::types::CodeShackError;

impl CodeShackError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            context: None,
        }
    }

    /// Create an authentication error with context
    pub fn auth_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new HTTP error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            url: None,
            status_code: None,
        }
    }

    /// Create an HTTP error for a failed response
    pub fn http_status(
        message: impl Into<String>,
        url: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Http {
            message: message.into(),
            url: Some(url.into()),
            status_code: Some(status_code),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error tied to a path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error for a named field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a not found error for a resource type
    pub fn not_found_resource(
        resource_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: Some(resource_type.into()),
        }
    }

    /// Create a partial failure error
    pub fn partial_failure(
        message: impl Into<String>,
        resource_id: impl Into<String>,
        rolled_back: bool,
    ) -> Self {
        Self::PartialFailure {
            message: message.into(),
            resource_id: resource_id.into(),
            rolled_back,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }
}
