//! HTTP plumbing shared by all endpoints

use crate::auth::{IdentitySession, request_config};
use crate::config::Config;
use crate::error::{CodeShackError, CodeShackResult};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the CodeShack REST API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    session: Arc<dyn IdentitySession>,
}

impl ApiClient {
    /// Create a client for the configured API
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: &Config, session: Arc<dyn IdentitySession>) -> CodeShackResult<Self> {
        let base = config.api_base()?;
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CodeShackError::http(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            "Created API client for {} with request timeout {}s",
            base,
            config.request_timeout().as_secs()
        );

        Ok(Self {
            http,
            base,
            session,
        })
    }

    /// Base URL every endpoint path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The identity session used for auth headers
    pub fn session(&self) -> &Arc<dyn IdentitySession> {
        &self.session
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, path: &str) -> CodeShackResult<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    pub(super) async fn post<B, T>(&self, path: &str, body: &B) -> CodeShackResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    /// POST whose response body is not needed
    pub(super) async fn post_discard<B>(&self, path: &str, body: &B) -> CodeShackResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    pub(super) async fn patch<B, T>(&self, path: &str, body: &B) -> CodeShackResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PATCH, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub(super) async fn delete(&self, path: &str) -> CodeShackResult<()> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    #[instrument(skip(self, method, body), fields(method = %method))]
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> CodeShackResult<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.base.join(path).map_err(|e| {
            CodeShackError::invalid_input(format!("Cannot build URL for '{}': {}", path, e))
        })?;

        let config = request_config(self.session.as_ref()).await?;
        let authenticated = config.is_authenticated();

        let mut request = config.apply(self.http.request(method.clone(), url.clone()));
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%url, authenticated, "Sending API request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            let message = if detail.is_empty() {
                format!("{} {} returned {}", method, url, status)
            } else {
                format!("{} {} returned {}: {}", method, url, status, detail)
            };
            return Err(CodeShackError::http_status(message, url.as_str(), status.as_u16()));
        }

        Ok(response)
    }
}

/// Validate a document id before it becomes a path segment
///
/// Rejects anything URL joining would resolve outside the resource path.
pub(super) fn segment(id: &str) -> CodeShackResult<&str> {
    if matches!(id, "" | "." | "..") || id.contains(['/', '\\', '?', '#', '%']) {
        return Err(CodeShackError::invalid_field(
            "id",
            format!("'{}' is not a valid document id", id),
        ));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_rejects_path_characters() {
        assert!(segment("5c9a1f").is_ok());
        assert!(segment("").is_err());
        assert!(segment("../user").is_err());
        assert!(segment("a?b").is_err());
        assert!(segment(".").is_err());
        assert!(segment("..").is_err());
        assert!(segment("%2e%2e").is_err());
        assert!(segment("a\\b").is_err());
        assert!(segment("v1.2").is_ok());
    }

    #[test]
    fn test_base_url_from_config() {
        let config = Config {
            api_url: "http://127.0.0.1:8080/api".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config, Arc::new(crate::auth::AnonymousSession)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/api/");
    }
}
