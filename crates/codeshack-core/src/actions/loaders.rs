//! Loading catalog documents into the store

use super::Actions;
use crate::error::{CodeShackError, CodeShackResult};
use crate::store::Action;
use crate::types::{
    Company, Course, CoursePatch, NewCompany, NewCourse, NewQuestion, NewTopic, Question, Topic,
};
use std::future::Future;
use tracing::warn;

impl Actions {
    /// Bracket a fetch with `StartLoading`/`StopLoading`
    ///
    /// On success the fetched value is dispatched through `into_action`. On
    /// failure the error is logged, loading stops, and the error is returned
    /// for callers that care; the state is otherwise left alone.
    async fn load_with<T, Fut>(
        &self,
        what: &str,
        fetch: Fut,
        into_action: impl FnOnce(T) -> Action,
    ) -> CodeShackResult<()>
    where
        Fut: Future<Output = CodeShackResult<T>>,
    {
        self.store.dispatch(Action::StartLoading);
        let result = fetch.await;
        let outcome = match result {
            Ok(value) => {
                self.store.dispatch(into_action(value));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "Unable to get {}", what);
                Err(error)
            }
        };
        self.store.dispatch(Action::StopLoading);
        outcome
    }

    /// Load all courses into the state
    pub async fn load_all_courses(&self) -> CodeShackResult<()> {
        self.load_with("courses", self.api.list_courses(), Action::LoadCourses)
            .await
    }

    /// Load a specific course into the state
    pub async fn load_course(&self, course_id: &str) -> CodeShackResult<()> {
        self.load_with("course", self.api.get_course(course_id), Action::LoadCourse)
            .await
    }

    /// Load all topics into the state
    pub async fn load_all_topics(&self) -> CodeShackResult<()> {
        self.load_with("topics", self.api.list_topics(), Action::LoadTopics)
            .await
    }

    /// Load a specific topic into the state
    pub async fn load_topic(&self, topic_id: &str) -> CodeShackResult<()> {
        self.load_with("topic", self.api.get_topic(topic_id), Action::LoadTopic)
            .await
    }

    /// Load all companies into the state
    pub async fn load_all_companies(&self) -> CodeShackResult<()> {
        self.load_with("companies", self.api.list_companies(), Action::LoadCompanies)
            .await
    }

    /// Load a specific company into the state
    pub async fn load_company(&self, company_id: &str) -> CodeShackResult<()> {
        self.load_with("company", self.api.get_company(company_id), Action::LoadCompany)
            .await
    }

    /// Load a specific question into the state
    pub async fn load_question(&self, question_id: &str) -> CodeShackResult<()> {
        self.load_with(
            "question",
            self.api.get_question(question_id),
            Action::LoadQuestion,
        )
        .await
    }

    /// Load the three tag sources an authoring form picks from
    pub async fn load_tag_sources(&self) -> CodeShackResult<()> {
        let (courses, topics, companies) = tokio::join!(
            self.load_all_courses(),
            self.load_all_topics(),
            self.load_all_companies()
        );
        courses.and(topics).and(companies)
    }

    /// Create a question; the error is handed back to the caller
    pub async fn create_question(&self, question: &NewQuestion) -> CodeShackResult<Question> {
        self.api.create_question(question).await.inspect_err(|error| {
            warn!(error = %error, "Unable to create question");
        })
    }

    /// Create a topic, then reload the topic list
    pub async fn create_topic(&self, topic: &NewTopic) -> CodeShackResult<Topic> {
        if topic.topic_name.trim().is_empty() {
            return Err(CodeShackError::invalid_field("topicName", "Topic name is empty"));
        }
        let created = self.api.create_topic(topic).await.inspect_err(|error| {
            warn!(error = %error, "Unable to create topic");
        })?;
        // The new topic is already created; a failed reload is logged by the loader
        let _ = self.load_all_topics().await;
        Ok(created)
    }

    /// Create a course, then reload the course list
    pub async fn create_course(&self, course: &NewCourse) -> CodeShackResult<Course> {
        let created = self.api.create_course(course).await.inspect_err(|error| {
            warn!(error = %error, "Unable to create course");
        })?;
        let _ = self.load_all_courses().await;
        Ok(created)
    }

    /// Update a course and make it the current course
    pub async fn update_course(
        &self,
        course_id: &str,
        patch: &CoursePatch,
    ) -> CodeShackResult<Course> {
        let updated = self.api.update_course(course_id, patch).await?;
        self.store.dispatch(Action::LoadCourse(updated.clone()));
        Ok(updated)
    }

    /// Create a company, then reload the company list
    pub async fn create_company(&self, company: &NewCompany) -> CodeShackResult<Company> {
        let created = self.api.create_company(company).await.inspect_err(|error| {
            warn!(error = %error, "Unable to create company");
        })?;
        let _ = self.load_all_companies().await;
        Ok(created)
    }

    /// Attach an existing question to a course
    pub async fn add_question_to_course(
        &self,
        course_id: &str,
        question_id: &str,
    ) -> CodeShackResult<()> {
        self.api.add_question_to_course(course_id, question_id).await
    }
}
