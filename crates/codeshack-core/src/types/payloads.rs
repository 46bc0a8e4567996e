//! Request bodies sent to the REST API

use serde::{Deserialize, Serialize};

/// Body of `POST /question`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub name: String,
    /// Serialized rich-text document
    pub content: String,
    /// Serialized rich-text document
    pub solution: String,
    pub courses: Vec<String>,
    pub topics: Vec<String>,
    pub companies: Vec<String>,
}

/// Body of `POST /course`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_name: String,
    pub course_number: String,
}

/// Body of `PATCH /course/:id`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_number: Option<String>,
}

/// Body of `POST /topic`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    pub topic_name: String,
}

/// Body of `POST /company`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub company_name: String,
}

/// Body of `POST /comment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Comment being replied to; `None` comments on the question itself
    pub parent: Option<String>,
}

/// Body of `POST /user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
}

/// Body of `POST /user/:id/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question_id: String,
}

/// Body of `POST /question/:id/addcomment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentLink {
    pub comment_id: String,
}

/// Body of `POST /comment/:id/reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyLink {
    pub reply_id: String,
}

/// Body of `POST /course/:id/addq`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseQuestionLink {
    pub question_id: String,
}
