//! User endpoints

use super::client::{ApiClient, segment};
use crate::error::CodeShackResult;
use crate::types::{HistoryEntry, NewUser, User};

impl ApiClient {
    /// `POST /user`
    pub async fn create_user(&self, user: &NewUser) -> CodeShackResult<User> {
        self.post("user", user).await
    }

    /// `GET /user/`: the user record of whoever the auth header identifies
    pub async fn current_user(&self) -> CodeShackResult<User> {
        self.get("user/").await
    }

    /// `POST /user/:id/history`
    pub async fn add_to_history(&self, user_id: &str, question_id: &str) -> CodeShackResult<User> {
        let entry = HistoryEntry {
            question_id: question_id.to_string(),
        };
        self.post(&format!("user/{}/history", segment(user_id)?), &entry)
            .await
    }
}
