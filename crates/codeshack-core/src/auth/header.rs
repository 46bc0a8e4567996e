//! Per-request authentication header

use super::session::IdentitySession;
use crate::error::CodeShackResult;
use reqwest::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Name of the auth header the backend reads
///
/// The backend expects `Authentication`, not the conventional `Authorization`.
pub const AUTH_HEADER: &str = "Authentication";

/// Headers to attach to one outgoing request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub headers: HeaderMap,
}

impl RequestConfig {
    /// True when a bearer header is present
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTH_HEADER)
    }

    /// Attach the headers to a request
    pub fn apply(self, request: RequestBuilder) -> RequestBuilder {
        if self.headers.is_empty() {
            request
        } else {
            request.headers(self.headers)
        }
    }
}

/// Build the header configuration for a single request
///
/// With an active session the token is force-refreshed and sent as
/// `Authentication: Bearer <token>`. Without one the configuration is empty and
/// the request goes out unauthenticated. Nothing is cached between calls.
pub async fn request_config(session: &dyn IdentitySession) -> CodeShackResult<RequestConfig> {
    let Some(user) = session.current_user() else {
        tracing::debug!("No active session, sending unauthenticated request");
        return Ok(RequestConfig::default());
    };

    let token = session.id_token(true).await?;
    tracing::debug!(uid = %user.uid, "Attached refreshed identity token");

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("authentication"),
        HeaderValue::from_str(&format!("Bearer {}", token))?,
    );

    Ok(RequestConfig { headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{MockIdentitySession, SessionUser};
    use crate::error::CodeShackError;

    fn signed_in() -> Option<SessionUser> {
        Some(SessionUser {
            uid: "uid-7".to_string(),
            email: "grace@example.com".to_string(),
        })
    }

    #[tokio::test]
    async fn test_active_session_gets_single_bearer_header() {
        let mut session = MockIdentitySession::new();
        session.expect_current_user().returning(signed_in);
        session
            .expect_id_token()
            .withf(|force| *force)
            .times(1)
            .returning(|_| Ok("tok-1".to_string()));

        let config = request_config(&session).await.unwrap();

        assert!(config.is_authenticated());
        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers.get(AUTH_HEADER).unwrap(), "Bearer tok-1");
        assert!(config.headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_no_session_gives_empty_config() {
        let mut session = MockIdentitySession::new();
        session.expect_current_user().returning(|| None);
        session.expect_id_token().never();

        let config = request_config(&session).await.unwrap();
        assert!(config.headers.is_empty());
        assert!(!config.is_authenticated());
    }

    #[tokio::test]
    async fn test_every_call_refetches_token() {
        let mut session = MockIdentitySession::new();
        session.expect_current_user().returning(signed_in);
        let mut counter = 0;
        session.expect_id_token().times(2).returning(move |_| {
            counter += 1;
            Ok(format!("tok-{}", counter))
        });

        let first = request_config(&session).await.unwrap();
        let second = request_config(&session).await.unwrap();

        assert_eq!(first.headers.get(AUTH_HEADER).unwrap(), "Bearer tok-1");
        assert_eq!(second.headers.get(AUTH_HEADER).unwrap(), "Bearer tok-2");
    }

    #[tokio::test]
    async fn test_token_failure_propagates() {
        let mut session = MockIdentitySession::new();
        session.expect_current_user().returning(signed_in);
        session
            .expect_id_token()
            .returning(|_| Err(CodeShackError::auth("revoked")));

        let err = request_config(&session).await.unwrap_err();
        assert_eq!(err.error_code(), "CODESHACK_AUTH");
    }
}
