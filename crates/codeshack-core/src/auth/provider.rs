//! Identity provider REST flows
//!
//! The provider issues short-lived identity tokens. A refresh token obtained at
//! sign-in is exchanged for a new identity token whenever one is needed.

use super::credentials::{CredentialStore, StoredCredentials};
use super::session::{IdentitySession, SessionUser};
use crate::config::Config;
use crate::error::{CodeShackError, CodeShackResult};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument, warn};

/// Client for the identity provider's token and account endpoints
#[derive(Debug, Clone)]
pub struct IdentityProvider {
    http: Client,
    token_endpoint: String,
    accounts_endpoint: String,
    api_key: Option<String>,
}

/// Response of the secure-token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default, deserialize_with = "seconds")]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    id_token: String,
    refresh_token: String,
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default, deserialize_with = "seconds")]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: String,
}

/// The provider sends lifetimes as strings ("3600"); accept numbers too
fn seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl IdentityProvider {
    pub fn new(config: &Config) -> CodeShackResult<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CodeShackError::auth(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            token_endpoint: config.identity.token_endpoint().to_string(),
            accounts_endpoint: config.identity.accounts_endpoint().to_string(),
            api_key: config.identity.api_key.clone(),
        })
    }

    fn api_key(&self) -> CodeShackResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            CodeShackError::config_with_context(
                "identity.api_key is not set",
                "Set CODESHACK_API_KEY or identity.api_key in the config file",
            )
        })
    }

    /// Exchange a refresh token for a new identity token
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> CodeShackResult<TokenGrant> {
        let response = self
            .http
            .post(&self.token_endpoint)
            .query(&[("key", self.api_key()?)])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response, "Refreshing identity token").await);
        }

        let grant: TokenGrant = response.json().await?;
        debug!(expires_in = ?grant.expires_in, "Identity token refreshed");
        Ok(grant)
    }

    /// Sign in with email and password
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> CodeShackResult<StoredCredentials> {
        self.account_call("accounts:signInWithPassword", email, password, "Signing in")
            .await
    }

    /// Create an account with email and password, signing it in
    pub async fn sign_up(&self, email: &str, password: &str) -> CodeShackResult<StoredCredentials> {
        self.account_call("accounts:signUp", email, password, "Signing up")
            .await
    }

    async fn account_call(
        &self,
        method: &str,
        email: &str,
        password: &str,
        context: &str,
    ) -> CodeShackResult<StoredCredentials> {
        let url = format!("{}/{}", self.accounts_endpoint, method);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key()?)])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response, context).await);
        }

        let account: AccountResponse = response.json().await?;
        let email = if account.email.is_empty() {
            email.to_string()
        } else {
            account.email
        };

        Ok(StoredCredentials {
            uid: account.local_id,
            email,
            refresh_token: account.refresh_token,
            id_token: Some(account.id_token),
            expires_in: account.expires_in,
            issued_at: Utc::now(),
        })
    }
}

async fn provider_error(response: reqwest::Response, context: &str) -> CodeShackError {
    let status = response.status();
    let message = match response.json::<ProviderErrorBody>().await {
        Ok(body) if !body.error.message.is_empty() => body.error.message,
        _ => status.to_string(),
    };
    CodeShackError::auth_with_context(message, context)
}

/// Session that mints identity tokens from stored credentials
pub struct RefreshTokenSession {
    provider: IdentityProvider,
    credentials: Mutex<StoredCredentials>,
    store: Option<CredentialStore>,
}

impl RefreshTokenSession {
    pub fn new(
        provider: IdentityProvider,
        credentials: StoredCredentials,
        store: Option<CredentialStore>,
    ) -> Self {
        Self {
            provider,
            credentials: Mutex::new(credentials),
            store,
        }
    }

    /// Snapshot of the credentials currently held
    pub fn credentials(&self) -> StoredCredentials {
        self.credentials.lock().clone()
    }
}

#[async_trait]
impl IdentitySession for RefreshTokenSession {
    fn current_user(&self) -> Option<SessionUser> {
        let credentials = self.credentials.lock();
        Some(SessionUser {
            uid: credentials.uid.clone(),
            email: credentials.email.clone(),
        })
    }

    async fn id_token(&self, force_refresh: bool) -> CodeShackResult<String> {
        let refresh_token = {
            let credentials = self.credentials.lock();
            if !force_refresh && !credentials.is_expired() {
                if let Some(token) = &credentials.id_token {
                    return Ok(token.clone());
                }
            }
            credentials.refresh_token.clone()
        };

        let grant = self.provider.refresh(&refresh_token).await?;

        let updated = {
            let mut credentials = self.credentials.lock();
            credentials.id_token = Some(grant.id_token.clone());
            credentials.expires_in = grant.expires_in;
            credentials.issued_at = Utc::now();
            credentials.refresh_token = grant.refresh_token;
            credentials.clone()
        };

        if let Some(store) = &self.store {
            if let Err(e) = store.store(&updated) {
                warn!("Failed to persist refreshed credentials: {}", e);
            }
        }

        Ok(grant.id_token)
    }
}
