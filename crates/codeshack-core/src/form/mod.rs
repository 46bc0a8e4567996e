//! Question authoring form
//!
//! Holds a question draft while it is being written: title, content and
//! solution documents, and the tags chosen for it.

mod tags;

pub use tags::{tag_groups, TagGroup, TagOption, TagSelection};

use crate::actions::Actions;
use crate::error::CodeShackResult;
use crate::navigation::{Navigator, Route};
use crate::richtext::RichTextDocument;
use crate::types::{NewQuestion, Question};
use tracing::{info, warn};

/// Draft of a new question
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionForm {
    title: String,
    content: Option<RichTextDocument>,
    solution: Option<RichTextDocument>,
    courses: Vec<String>,
    topics: Vec<String>,
    companies: Vec<String>,
    error: bool,
}

impl QuestionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: RichTextDocument) {
        self.content = Some(content);
    }

    pub fn set_solution(&mut self, solution: RichTextDocument) {
        self.solution = Some(solution);
    }

    /// Replace all tag lists with the given selections, in order
    pub fn set_tags(&mut self, selections: &[TagSelection]) {
        let mut courses = Vec::new();
        let mut topics = Vec::new();
        let mut companies = Vec::new();
        for selection in selections {
            match selection {
                TagSelection::Course(id) => courses.push(id.clone()),
                TagSelection::Topic(id) => topics.push(id.clone()),
                TagSelection::Company(id) => companies.push(id.clone()),
            }
        }
        self.courses = courses;
        self.topics = topics;
        self.companies = companies;
    }

    /// Same as [`set_tags`](Self::set_tags) from raw `(category, id)` pairs
    ///
    /// Pairs with an unknown category are dropped.
    pub fn set_tags_from_pairs<C, I>(&mut self, pairs: &[(C, I)])
    where
        C: AsRef<str>,
        I: AsRef<str>,
    {
        let selections: Vec<TagSelection> = pairs
            .iter()
            .filter_map(|(category, id)| TagSelection::from_pair(category.as_ref(), id.as_ref()))
            .collect();
        self.set_tags(&selections);
    }

    /// Whether the draft is complete enough to send
    pub fn can_submit(&self) -> bool {
        self.content.is_some()
            && self.solution.is_some()
            && !self.title.is_empty()
            && (!self.courses.is_empty() || !self.topics.is_empty() || !self.companies.is_empty())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&RichTextDocument> {
        self.content.as_ref()
    }

    pub fn solution(&self) -> Option<&RichTextDocument> {
        self.solution.as_ref()
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    /// Set after a failed submit, cleared after a successful one
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Build the request body
    ///
    /// An unset document is sent as JSON `null`.
    pub fn to_payload(&self, poster: Option<String>) -> CodeShackResult<NewQuestion> {
        Ok(NewQuestion {
            poster,
            name: self.title.clone(),
            content: transport(self.content.as_ref())?,
            solution: transport(self.solution.as_ref())?,
            courses: self.courses.clone(),
            topics: self.topics.clone(),
            companies: self.companies.clone(),
        })
    }

    /// Send the draft
    ///
    /// On success the error flag is cleared, the question is saved to the
    /// signed-in user's history and the navigator moves to the new question.
    /// On failure the error flag is set and nothing navigates.
    /// [`can_submit`](Self::can_submit) is not re-checked here.
    pub async fn submit(
        &mut self,
        actions: &Actions,
        navigator: &mut dyn Navigator,
    ) -> CodeShackResult<Question> {
        let poster = actions
            .store()
            .select(|state| state.user_id().map(str::to_string));

        let created = match self.to_payload(poster.clone()) {
            Ok(payload) => actions.create_question(&payload).await,
            Err(error) => Err(error),
        };

        match created {
            Ok(question) => {
                self.error = false;
                info!(question_id = %question.id, "Question created");
                if let Some(user_id) = poster {
                    actions
                        .save_question_to_user_history(&question.id, &user_id)
                        .await;
                }
                navigator.push(&Route::Question(question.id.clone()).path());
                Ok(question)
            }
            Err(error) => {
                warn!(error = %error, "Question submit failed");
                self.error = true;
                Err(error)
            }
        }
    }
}

fn transport(document: Option<&RichTextDocument>) -> CodeShackResult<String> {
    match document {
        Some(document) => document.to_transport(),
        None => Ok("null".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> QuestionForm {
        let mut form = QuestionForm::new();
        form.set_title("Two Sum");
        form.set_content(RichTextDocument::from_plain_text("Find two numbers"));
        form.set_solution(RichTextDocument::from_plain_text("Use a hash map"));
        form
    }

    #[test]
    fn test_set_tags_partitions_in_order() {
        let mut form = QuestionForm::new();
        form.set_tags(&[
            TagSelection::Course("c1".to_string()),
            TagSelection::Topic("t1".to_string()),
            TagSelection::Course("c2".to_string()),
            TagSelection::Company("x1".to_string()),
        ]);
        assert_eq!(form.courses(), ["c1", "c2"]);
        assert_eq!(form.topics(), ["t1"]);
        assert_eq!(form.companies(), ["x1"]);
    }

    #[test]
    fn test_set_tags_replaces_previous_selection() {
        let mut form = QuestionForm::new();
        form.set_tags(&[TagSelection::Course("c1".to_string())]);
        form.set_tags(&[TagSelection::Topic("t1".to_string())]);
        assert!(form.courses().is_empty());
        assert_eq!(form.topics(), ["t1"]);
    }

    #[test]
    fn test_unknown_category_is_dropped() {
        let mut form = QuestionForm::new();
        form.set_tags_from_pairs(&[("course", "c1"), ("school", "s1"), ("company", "x1")]);
        assert_eq!(form.courses(), ["c1"]);
        assert!(form.topics().is_empty());
        assert_eq!(form.companies(), ["x1"]);
    }

    #[test]
    fn test_cannot_submit_without_title() {
        let mut form = complete_form();
        form.set_tags(&[TagSelection::Topic("t1".to_string())]);
        form.set_title("");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_cannot_submit_without_tags_or_documents() {
        let form = complete_form();
        assert!(!form.can_submit());

        let mut form = QuestionForm::new();
        form.set_title("Two Sum");
        form.set_tags(&[TagSelection::Topic("t1".to_string())]);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_with_any_single_tag() {
        for tag in [
            TagSelection::Course("c1".to_string()),
            TagSelection::Topic("t1".to_string()),
            TagSelection::Company("x1".to_string()),
        ] {
            let mut form = complete_form();
            form.set_tags(&[tag]);
            assert!(form.can_submit());
        }
    }

    #[test]
    fn test_payload_carries_transport_documents() {
        let mut form = complete_form();
        form.set_tags(&[TagSelection::Company("x1".to_string())]);
        let payload = form.to_payload(Some("u1".to_string())).unwrap();

        assert_eq!(payload.name, "Two Sum");
        assert_eq!(payload.poster.as_deref(), Some("u1"));
        assert_eq!(payload.companies, ["x1"]);
        let content = RichTextDocument::from_transport(&payload.content).unwrap();
        assert_eq!(content.plain_text(), "Find two numbers");
    }

    #[test]
    fn test_payload_sends_null_for_missing_solution() {
        let mut form = QuestionForm::new();
        form.set_title("Draft");
        form.set_content(RichTextDocument::from_plain_text("text"));
        let payload = form.to_payload(None).unwrap();
        assert_eq!(payload.solution, "null");
    }
}
