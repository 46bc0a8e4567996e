//! State update events

use crate::types::{Comment, Company, Course, Question, Topic, User};

/// Every way the application state can change
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StartLoading,
    StopLoading,
    LoadCourses(Vec<Course>),
    LoadCourse(Course),
    LoadTopics(Vec<Topic>),
    LoadTopic(Topic),
    LoadCompanies(Vec<Company>),
    LoadCompany(Company),
    LoadQuestion(Question),
    LoadComment(Comment),
    SetUser(User),
    AuthError,
    LogoutUser,
}

impl Action {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartLoading => "START_LOADING",
            Action::StopLoading => "STOP_LOADING",
            Action::LoadCourses(_) => "LOAD_COURSES",
            Action::LoadCourse(_) => "LOAD_COURSE",
            Action::LoadTopics(_) => "LOAD_TOPICS",
            Action::LoadTopic(_) => "LOAD_TOPIC",
            Action::LoadCompanies(_) => "LOAD_COMPANIES",
            Action::LoadCompany(_) => "LOAD_COMPANY",
            Action::LoadQuestion(_) => "LOAD_QUESTION",
            Action::LoadComment(_) => "LOAD_COMMENT",
            Action::SetUser(_) => "SET_USER",
            Action::AuthError => "AUTH_ERROR",
            Action::LogoutUser => "LOGOUT_USER",
        }
    }
}
