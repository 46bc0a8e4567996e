//! Identity sessions and the authenticated request wrapper
//!
//! Provides:
//! - the [`IdentitySession`] seam over the external identity provider
//! - [`request_config`], which derives a fresh auth header for one request
//! - refresh-token and password sign-in flows against the provider
//! - file-based storage of signed-in credentials

mod credentials;
mod header;
mod provider;
mod session;

pub use credentials::{CredentialStore, StoredCredentials};
pub use header::{AUTH_HEADER, RequestConfig, request_config};
pub use provider::{IdentityProvider, RefreshTokenSession, TokenGrant};
pub use session::{AnonymousSession, IdentitySession, SessionUser, StaticTokenSession};

#[cfg(test)]
pub use session::MockIdentitySession;

use crate::config::Config;
use crate::error::CodeShackResult;
use std::sync::Arc;

/// Pick the session implied by the configuration
///
/// A configured fixed token wins; otherwise stored credentials (if any) are
/// used with the refresh-token flow; otherwise requests go out anonymous.
pub fn resolve_session(config: &Config) -> CodeShackResult<Arc<dyn IdentitySession>> {
    if let Some(token) = &config.identity.id_token {
        tracing::debug!("Using fixed identity token from configuration");
        return Ok(Arc::new(StaticTokenSession::new(token.clone())));
    }

    if let Some(store) = CredentialStore::from_config(config) {
        if let Some(credentials) = store.load()? {
            tracing::debug!("Using stored credentials for {}", credentials.email);
            let provider = IdentityProvider::new(config)?;
            return Ok(Arc::new(RefreshTokenSession::new(
                provider,
                credentials,
                Some(store),
            )));
        }
    }

    tracing::debug!("No identity configured, requests will be anonymous");
    Ok(Arc::new(AnonymousSession))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_token_wins() {
        let mut config = Config::default();
        config.identity.id_token = Some("fixed".to_string());

        let session = resolve_session(&config).unwrap();
        assert!(session.current_user().is_some());
    }

    #[test]
    fn test_anonymous_without_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.identity.credentials_file = Some(temp_dir.path().join("credentials.json"));

        let session = resolve_session(&config).unwrap();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_stored_credentials_give_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.json");
        let mut config = Config::default();
        config.identity.credentials_file = Some(path.clone());

        CredentialStore::new(&path)
            .store(&StoredCredentials::new("uid-1", "ada@example.com", "refresh-1"))
            .unwrap();

        let session = resolve_session(&config).unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.email, "ada@example.com");
    }
}
