//! Comment threads

use super::Actions;
use crate::error::{CodeShackError, CodeShackResult};
use crate::store::Action;
use crate::types::{Comment, NewComment};
use tracing::{debug, warn};

impl Actions {
    /// Create a comment and attach it to its question or parent comment
    ///
    /// Two phases: `POST /comment`, then either
    /// `POST /question/:id/addcomment` (no parent) or
    /// `POST /comment/:parent/reply`. The parent is taken from the created
    /// comment as the backend returned it.
    ///
    /// If the second phase fails the created comment is deleted again and a
    /// [`CodeShackError::PartialFailure`] names it and whether the delete
    /// worked.
    pub async fn create_comment_and_reply(
        &self,
        comment: &NewComment,
        question_id: &str,
    ) -> CodeShackResult<Comment> {
        let created = self
            .api
            .create_comment(comment)
            .await
            .inspect_err(|error| warn!(error = %error, "Error creating comment"))?;

        let linked = match &created.parent {
            None => {
                self.api
                    .add_comment_to_question(question_id, &created.id)
                    .await
            }
            Some(parent) => self.api.reply_to_comment(parent, &created.id).await,
        };

        if let Err(link_error) = linked {
            warn!(
                error = %link_error,
                comment_id = %created.id,
                "Error replying comment, rolling back"
            );
            let rolled_back = match self.api.delete_comment(&created.id).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(error = %error, comment_id = %created.id, "Rollback delete failed");
                    false
                }
            };
            return Err(CodeShackError::partial_failure(
                format!("Comment was created but could not be attached: {}", link_error),
                created.id,
                rolled_back,
            ));
        }

        debug!(comment_id = %created.id, "Comment created and attached");
        Ok(created)
    }

    /// Load a comment into the state; failures are dropped quietly
    pub async fn load_comment(&self, comment_id: &str) -> CodeShackResult<()> {
        let comment = self
            .api
            .get_comment(comment_id)
            .await
            .inspect_err(|error| debug!(error = %error, "Unable to load comment"))?;
        self.store.dispatch(Action::LoadComment(comment));
        Ok(())
    }

    /// Delete a comment
    pub async fn delete_comment(&self, comment_id: &str) -> CodeShackResult<()> {
        self.api
            .delete_comment(comment_id)
            .await
            .inspect_err(|error| warn!(error = %error, "Error deleting comment"))
    }
}
