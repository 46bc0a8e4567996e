//! Courses, topics and companies

use super::populated::{HasId, Populated};
use super::question::Question;
use serde::{Deserialize, Serialize};

/// A university course questions can be tagged with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_number: String,
    #[serde(default)]
    pub questions: Vec<Populated<Question>>,
}

/// A subject area such as "Dynamic Programming"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub topic_name: String,
    #[serde(default)]
    pub questions: Vec<Populated<Question>>,
}

/// A company that asked a question in an interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub questions: Vec<Populated<Question>>,
}

impl Course {
    /// "CS506: Programming"
    pub fn label(&self) -> String {
        format!("{}: {}", self.course_number, self.course_name)
    }
}

impl HasId for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Topic {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Company {
    fn id(&self) -> &str {
        &self.id
    }
}
