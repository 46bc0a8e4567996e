//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use codeshack_core::auth::{IdentitySession, SessionUser};
use codeshack_core::{Actions, ApiClient, CodeShackResult, Config, Store};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::MockServer;

/// Config pointing the API at a mock server
pub fn config_for(server: &MockServer) -> Config {
    Config {
        api_url: format!("{}/api", server.uri()),
        ..Config::default()
    }
}

pub fn actions_for(server: &MockServer, session: Arc<dyn IdentitySession>) -> Actions {
    let api = ApiClient::new(&config_for(server), session).unwrap();
    Actions::new(api, Store::new())
}

/// Session that hands out a new numbered token on every request
#[derive(Default)]
pub struct CountingSession {
    issued: AtomicUsize,
    forced: AtomicUsize,
}

impl CountingSession {
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn forced(&self) -> usize {
        self.forced.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentitySession for CountingSession {
    fn current_user(&self) -> Option<SessionUser> {
        Some(SessionUser {
            uid: "uid-1".to_string(),
            email: "ada@example.com".to_string(),
        })
    }

    async fn id_token(&self, force_refresh: bool) -> CodeShackResult<String> {
        if force_refresh {
            self.forced.fetch_add(1, Ordering::SeqCst);
        }
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("token-{}", n))
    }
}

pub fn topic_json(id: &str, name: &str) -> Value {
    json!({ "_id": id, "topicName": name, "questions": [] })
}

pub fn user_json(id: &str, role: &str) -> Value {
    json!({ "_id": id, "email": "ada@example.com", "role": role, "history": [] })
}

pub fn comment_json(id: &str, parent: Option<&str>) -> Value {
    json!({ "_id": id, "content": "Nice one", "parent": parent, "replies": [] })
}
