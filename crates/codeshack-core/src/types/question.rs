//! Questions and their comment threads

use super::catalog::{Company, Course, Topic};
use super::populated::{HasId, Populated};
use super::user::User;
use serde::{Deserialize, Serialize};

/// An interview question
///
/// `content` and `solution` hold serialized rich-text documents; see
/// [`crate::richtext::RichTextDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<Populated<User>>,
    #[serde(default)]
    pub courses: Vec<Populated<Course>>,
    #[serde(default)]
    pub topics: Vec<Populated<Topic>>,
    #[serde(default)]
    pub companies: Vec<Populated<Company>>,
    #[serde(default)]
    pub comments: Vec<Populated<Comment>>,
}

/// A comment on a question, or a reply to another comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<Populated<User>>,
    /// Parent comment; `None` for a top-level comment
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub replies: Vec<Populated<Comment>>,
}

impl HasId for Question {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_parent_null() {
        let comment: Comment = serde_json::from_value(json!({
            "_id": "c1",
            "content": "nice",
            "parent": null,
            "replies": []
        }))
        .unwrap();
        assert!(comment.parent.is_none());
    }

    #[test]
    fn test_question_minimal() {
        let question: Question = serde_json::from_value(json!({"_id": "q9"})).unwrap();
        assert_eq!(question.id, "q9");
        assert!(question.poster.is_none());
        assert!(question.comments.is_empty());
    }
}
