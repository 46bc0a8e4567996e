//! Signing in, signing up and user history

use super::Actions;
use crate::error::CodeShackResult;
use crate::store::Action;
use crate::types::NewUser;
use tracing::{info, warn};

impl Actions {
    /// Load the signed-in user's record into the state
    ///
    /// On failure `AuthError` is dispatched and the error (carrying the HTTP
    /// status, if any) is returned.
    pub async fn login_user(&self) -> CodeShackResult<()> {
        self.store.dispatch(Action::StartLoading);
        let result = self.api.current_user().await;
        let outcome = match result {
            Ok(user) => {
                info!(user_id = %user.id, "Signed in");
                self.store.dispatch(Action::SetUser(user));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, status = ?error.status_code(), "Unable to load user");
                self.store.dispatch(Action::AuthError);
                Err(error)
            }
        };
        self.store.dispatch(Action::StopLoading);
        outcome
    }

    /// Create the backend record for a new account and load it
    pub async fn signup_user(&self, user: &NewUser) -> CodeShackResult<()> {
        match self.api.create_user(user).await {
            Ok(created) => {
                info!(user_id = %created.id, "Created user");
                self.store.dispatch(Action::SetUser(created));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "Unable to create user");
                self.store.dispatch(Action::AuthError);
                Err(error)
            }
        }
    }

    /// Forget the signed-in user
    pub fn logout_user(&self) {
        self.store.dispatch(Action::LogoutUser);
    }

    /// Record a question in a user's history
    ///
    /// Fire-and-forget: failures are logged and dropped.
    pub async fn save_question_to_user_history(&self, question_id: &str, user_id: &str) {
        match self.api.add_to_history(user_id, question_id).await {
            Ok(user) => self.store.dispatch(Action::SetUser(user)),
            Err(error) => {
                warn!(error = %error, "Unable to save question to user history");
            }
        }
    }
}
