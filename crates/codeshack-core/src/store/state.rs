//! Application state and its reducer

use super::action::Action;
use crate::types::{Comment, Company, Course, Question, Topic, User};

/// Session-wide client state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Backend record of the signed-in user
    pub auth_user: Option<User>,
    /// Set when signing in or up failed
    pub auth_error: bool,
    /// True while any bracketed load is in flight
    pub is_loading: bool,
    pending_loads: usize,
    pub courses: Vec<Course>,
    pub topics: Vec<Topic>,
    pub companies: Vec<Company>,
    pub current_course: Option<Course>,
    pub current_topic: Option<Topic>,
    pub current_company: Option<Company>,
    pub current_question: Option<Question>,
    pub current_comment: Option<Comment>,
}

impl AppState {
    /// Apply an action
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::StartLoading => {
                self.pending_loads += 1;
                self.is_loading = true;
            }
            Action::StopLoading => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                self.is_loading = self.pending_loads > 0;
            }
            Action::LoadCourses(courses) => self.courses = courses,
            Action::LoadCourse(course) => self.current_course = Some(course),
            Action::LoadTopics(topics) => self.topics = topics,
            Action::LoadTopic(topic) => self.current_topic = Some(topic),
            Action::LoadCompanies(companies) => self.companies = companies,
            Action::LoadCompany(company) => self.current_company = Some(company),
            Action::LoadQuestion(question) => self.current_question = Some(question),
            Action::LoadComment(comment) => self.current_comment = Some(comment),
            Action::SetUser(user) => {
                self.auth_user = Some(user);
                self.auth_error = false;
            }
            Action::AuthError => self.auth_error = true,
            Action::LogoutUser => {
                self.auth_user = None;
                self.auth_error = false;
            }
        }
    }

    /// Id of the signed-in user
    pub fn user_id(&self) -> Option<&str> {
        self.auth_user.as_ref().map(|user| user.id.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.auth_user.as_ref().is_some_and(User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            role: role.to_string(),
            history: Vec::new(),
        }
    }

    #[test]
    fn test_loading_flag() {
        let mut state = AppState::default();
        state.reduce(Action::StartLoading);
        assert!(state.is_loading);
        state.reduce(Action::StopLoading);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_overlapping_loads_keep_flag_until_last_stop() {
        let mut state = AppState::default();
        state.reduce(Action::StartLoading);
        state.reduce(Action::StartLoading);
        state.reduce(Action::StopLoading);
        assert!(state.is_loading);

        state.reduce(Action::StopLoading);
        assert!(!state.is_loading);

        // A stray stop does not wrap around
        state.reduce(Action::StopLoading);
        state.reduce(Action::StartLoading);
        assert!(state.is_loading);
    }

    #[test]
    fn test_set_user_clears_auth_error() {
        let mut state = AppState::default();
        state.reduce(Action::AuthError);
        assert!(state.auth_error);

        state.reduce(Action::SetUser(user("student")));
        assert!(!state.auth_error);
        assert_eq!(state.user_id(), Some("u1"));
        assert!(!state.is_admin());
    }

    #[test]
    fn test_logout_clears_user() {
        let mut state = AppState::default();
        state.reduce(Action::SetUser(user("admin")));
        assert!(state.is_admin());

        state.reduce(Action::LogoutUser);
        assert!(state.auth_user.is_none());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_load_topics_replaces_list() {
        let mut state = AppState::default();
        let topic = Topic {
            id: "t1".to_string(),
            topic_name: "Graphs".to_string(),
            questions: Vec::new(),
        };
        state.reduce(Action::LoadTopics(vec![topic.clone(), topic.clone()]));
        state.reduce(Action::LoadTopics(vec![topic]));
        assert_eq!(state.topics.len(), 1);
    }
}
