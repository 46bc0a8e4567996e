//! Identity session seam

use crate::error::{CodeShackError, CodeShackResult};
use async_trait::async_trait;

/// The account behind an active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Identity-provider user id
    pub uid: String,
    pub email: String,
}

/// Access to the identity provider's notion of "who is signed in"
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentitySession: Send + Sync {
    /// The signed-in account, or `None` when no session is active
    fn current_user(&self) -> Option<SessionUser>;

    /// Fetch an identity token for the active session
    ///
    /// With `force_refresh` the provider is asked for a new token even if a
    /// previously issued one is still valid.
    async fn id_token(&self, force_refresh: bool) -> CodeShackResult<String>;
}

/// No one is signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

#[async_trait]
impl IdentitySession for AnonymousSession {
    fn current_user(&self) -> Option<SessionUser> {
        None
    }

    async fn id_token(&self, _force_refresh: bool) -> CodeShackResult<String> {
        Err(CodeShackError::auth("No active session"))
    }
}

/// A session backed by a fixed token
///
/// Refreshing is a no-op: the same token is returned every time.
#[derive(Debug, Clone)]
pub struct StaticTokenSession {
    token: String,
    user: SessionUser,
}

impl StaticTokenSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: SessionUser {
                uid: String::new(),
                email: String::new(),
            },
        }
    }

    /// Attach account details to the session
    pub fn with_user(mut self, uid: impl Into<String>, email: impl Into<String>) -> Self {
        self.user = SessionUser {
            uid: uid.into(),
            email: email.into(),
        };
        self
    }
}

#[async_trait]
impl IdentitySession for StaticTokenSession {
    fn current_user(&self) -> Option<SessionUser> {
        Some(self.user.clone())
    }

    async fn id_token(&self, _force_refresh: bool) -> CodeShackResult<String> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_anonymous_has_no_token() {
        let session = AnonymousSession;
        assert!(session.current_user().is_none());
        assert!(session.id_token(true).await.is_err());
    }

    #[tokio::test]
    async fn test_static_token() {
        let session = StaticTokenSession::new("abc").with_user("u1", "a@b.c");
        assert_eq!(session.current_user().unwrap().uid, "u1");
        assert_eq!(session.id_token(true).await.unwrap(), "abc");
    }
}
