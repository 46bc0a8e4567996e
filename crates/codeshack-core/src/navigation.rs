//! Client-side navigation

use std::fmt;

/// Pages a flow can move to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Question(String),
    Topic(String),
    Course(String),
    Company(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Question(id) => format!("/question/{}", id),
            Route::Topic(id) => format!("/topic/{}", id),
            Route::Course(id) => format!("/course/{}", id),
            Route::Company(id) => format!("/company/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Anything that can be told to move to a new path
pub trait Navigator: Send {
    fn push(&mut self, path: &str);
}

/// In-memory navigator that records every pushed path
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Most recently pushed path
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl Navigator for History {
    fn push(&mut self, path: &str) {
        tracing::debug!(path, "navigate");
        self.entries.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Question("q1".into()).path(), "/question/q1");
        assert_eq!(Route::Topic("t1".into()).path(), "/topic/t1");
        assert_eq!(Route::Course("c1".into()).to_string(), "/course/c1");
        assert_eq!(Route::Company("x".into()).path(), "/company/x");
    }

    #[test]
    fn test_history_records_pushes() {
        let mut history = History::new();
        assert!(history.current().is_none());

        history.push("/topic/t1");
        history.push("/question/q1");
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.current(), Some("/question/q1"));
    }
}
