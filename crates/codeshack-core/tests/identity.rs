//! Identity provider flows and stored sessions

mod common;

use codeshack_core::auth::{
    AUTH_HEADER, CredentialStore, IdentityProvider, IdentitySession, RefreshTokenSession,
    StoredCredentials,
};
use codeshack_core::{ApiClient, Config, resolve_session};
use common::topic_json;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_config(server: &MockServer, credentials: &Path) -> Config {
    let mut config = Config {
        api_url: format!("{}/api", server.uri()),
        ..Config::default()
    };
    config.identity.token_endpoint = Some(format!("{}/v1/token", server.uri()));
    config.identity.accounts_endpoint = Some(format!("{}/v1/", server.uri()));
    config.identity.api_key = Some("key-123".to_string());
    config.identity.credentials_file = Some(credentials.to_path_buf());
    config
}

async fn mount_refresh(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/token"))
        .and(query_param("key", "key-123"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_token": "fresh-id-token",
            "refresh_token": "rotated-refresh",
            "expires_in": "3600",
            "user_id": "uid-1"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_forced_refresh_rotates_and_persists() {
    let server = MockServer::start().await;
    mount_refresh(&server, 1).await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("credentials.json");
    let config = provider_config(&server, &file);
    let store = CredentialStore::new(&file);

    let session = RefreshTokenSession::new(
        IdentityProvider::new(&config).unwrap(),
        StoredCredentials::new("uid-1", "ada@example.com", "initial-refresh"),
        Some(store.clone()),
    );

    let token = session.id_token(true).await.unwrap();
    assert_eq!(token, "fresh-id-token");

    let held = session.credentials();
    assert_eq!(held.refresh_token, "rotated-refresh");
    assert_eq!(held.expires_in, Some(3600));

    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.refresh_token, "rotated-refresh");
    assert_eq!(persisted.id_token.as_deref(), Some("fresh-id-token"));
}

#[tokio::test]
async fn test_api_calls_refresh_every_time() {
    let server = MockServer::start().await;
    mount_refresh(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/api/topic/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_json("t1", "Graphs")))
        .expect(2)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("credentials.json");
    let config = provider_config(&server, &file);

    let session = Arc::new(RefreshTokenSession::new(
        IdentityProvider::new(&config).unwrap(),
        StoredCredentials::new("uid-1", "ada@example.com", "initial-refresh"),
        None,
    ));
    let client = ApiClient::new(&config, session).unwrap();

    client.get_topic("t1").await.unwrap();
    client.get_topic("t1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let api_headers: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path().starts_with("/api/"))
        .map(|r| r.headers.get(AUTH_HEADER).unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(api_headers, ["Bearer fresh-id-token", "Bearer fresh-id-token"]);
}

#[tokio::test]
async fn test_password_sign_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "key-123"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter22",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idToken": "id-1",
            "refreshToken": "refresh-1",
            "localId": "uid-1",
            "email": "ada@example.com",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = provider_config(&server, &dir.path().join("credentials.json"));
    let provider = IdentityProvider::new(&config).unwrap();

    let credentials = provider
        .sign_in_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(credentials.uid, "uid-1");
    assert_eq!(credentials.refresh_token, "refresh-1");
    assert!(!credentials.is_expired());
}

#[tokio::test]
async fn test_provider_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "EMAIL_EXISTS" }
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = provider_config(&server, &dir.path().join("credentials.json"));
    let provider = IdentityProvider::new(&config).unwrap();

    let err = provider
        .sign_up("ada@example.com", "hunter22")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "CODESHACK_AUTH");
    assert!(err.to_string().contains("EMAIL_EXISTS"));
}

#[tokio::test]
async fn test_resolve_session_uses_stored_credentials() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("credentials.json");
    let config = provider_config(&server, &file);

    let anonymous = resolve_session(&config).unwrap();
    assert!(anonymous.current_user().is_none());

    CredentialStore::new(&file)
        .store(&StoredCredentials::new("uid-1", "ada@example.com", "r"))
        .unwrap();
    let stored = resolve_session(&config).unwrap();
    assert_eq!(stored.current_user().unwrap().email, "ada@example.com");
}
