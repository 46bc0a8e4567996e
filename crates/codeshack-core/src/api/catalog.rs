//! Course, topic and company endpoints

use super::client::{ApiClient, segment};
use crate::error::CodeShackResult;
use crate::types::{
    Company, Course, CoursePatch, CourseQuestionLink, NewCompany, NewCourse, NewTopic, Topic,
};

impl ApiClient {
    /// `GET /course`
    pub async fn list_courses(&self) -> CodeShackResult<Vec<Course>> {
        self.get("course").await
    }

    /// `POST /course`
    pub async fn create_course(&self, course: &NewCourse) -> CodeShackResult<Course> {
        self.post("course", course).await
    }

    /// `GET /course/:id`
    pub async fn get_course(&self, id: &str) -> CodeShackResult<Course> {
        self.get(&format!("course/{}", segment(id)?)).await
    }

    /// `PATCH /course/:id`
    pub async fn update_course(&self, id: &str, patch: &CoursePatch) -> CodeShackResult<Course> {
        self.patch(&format!("course/{}", segment(id)?), patch).await
    }

    /// `POST /course/:id/addq`
    pub async fn add_question_to_course(
        &self,
        course_id: &str,
        question_id: &str,
    ) -> CodeShackResult<()> {
        let link = CourseQuestionLink {
            question_id: question_id.to_string(),
        };
        self.post_discard(&format!("course/{}/addq", segment(course_id)?), &link)
            .await
    }

    /// `GET /topic`
    pub async fn list_topics(&self) -> CodeShackResult<Vec<Topic>> {
        self.get("topic").await
    }

    /// `POST /topic`
    pub async fn create_topic(&self, topic: &NewTopic) -> CodeShackResult<Topic> {
        self.post("topic", topic).await
    }

    /// `GET /topic/:id`
    pub async fn get_topic(&self, id: &str) -> CodeShackResult<Topic> {
        self.get(&format!("topic/{}", segment(id)?)).await
    }

    /// `GET /company`
    pub async fn list_companies(&self) -> CodeShackResult<Vec<Company>> {
        self.get("company").await
    }

    /// `POST /company`
    pub async fn create_company(&self, company: &NewCompany) -> CodeShackResult<Company> {
        self.post("company", company).await
    }

    /// `GET /company/:id`
    pub async fn get_company(&self, id: &str) -> CodeShackResult<Company> {
        self.get(&format!("company/{}", segment(id)?)).await
    }
}
