//! Question and comment endpoints

use super::client::{ApiClient, segment};
use crate::error::CodeShackResult;
use crate::types::{Comment, CommentLink, NewComment, NewQuestion, Question, ReplyLink};

impl ApiClient {
    /// `GET /question`
    pub async fn list_questions(&self) -> CodeShackResult<Vec<Question>> {
        self.get("question").await
    }

    /// `POST /question`
    pub async fn create_question(&self, question: &NewQuestion) -> CodeShackResult<Question> {
        self.post("question", question).await
    }

    /// `GET /question/:id`
    pub async fn get_question(&self, id: &str) -> CodeShackResult<Question> {
        self.get(&format!("question/{}", segment(id)?)).await
    }

    /// `POST /question/:id/addcomment`
    pub async fn add_comment_to_question(
        &self,
        question_id: &str,
        comment_id: &str,
    ) -> CodeShackResult<()> {
        let link = CommentLink {
            comment_id: comment_id.to_string(),
        };
        self.post_discard(&format!("question/{}/addcomment", segment(question_id)?), &link)
            .await
    }

    /// `POST /comment`
    pub async fn create_comment(&self, comment: &NewComment) -> CodeShackResult<Comment> {
        self.post("comment", comment).await
    }

    /// `GET /comment/:id`
    pub async fn get_comment(&self, id: &str) -> CodeShackResult<Comment> {
        self.get(&format!("comment/{}", segment(id)?)).await
    }

    /// `DELETE /comment/:id`
    pub async fn delete_comment(&self, id: &str) -> CodeShackResult<()> {
        self.delete(&format!("comment/{}", segment(id)?)).await
    }

    /// `POST /comment/:id/reply`
    pub async fn reply_to_comment(&self, parent_id: &str, reply_id: &str) -> CodeShackResult<()> {
        let link = ReplyLink {
            reply_id: reply_id.to_string(),
        };
        self.post_discard(&format!("comment/{}/reply", segment(parent_id)?), &link)
            .await
    }
}
