//! Read-only projections of catalog documents for display

use crate::richtext::describe;
use crate::types::{Populated, Question, Topic};

/// One line of a question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: String,
    pub name: String,
    /// Plain text of the question's content
    pub description: String,
}

impl QuestionRow {
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            name: question.name.clone(),
            description: describe(&question.content),
        }
    }
}

/// Topics ordered by how many questions they hold, most first
///
/// Topics with equal counts keep their original order.
pub fn topics_by_question_count(topics: &[Topic]) -> Vec<&Topic> {
    let mut sorted: Vec<&Topic> = topics.iter().collect();
    sorted.sort_by(|a, b| b.questions.len().cmp(&a.questions.len()));
    sorted
}

/// Listing rows for a document's questions
///
/// Questions that came back as bare ids get a row with only the id.
pub fn question_rows(questions: &[Populated<Question>]) -> Vec<QuestionRow> {
    questions
        .iter()
        .map(|question| match question {
            Populated::Document(question) => QuestionRow::from_question(question),
            Populated::Id(id) => QuestionRow {
                id: id.clone(),
                name: String::new(),
                description: String::new(),
            },
        })
        .collect()
}
