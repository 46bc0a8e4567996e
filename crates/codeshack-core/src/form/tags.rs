//! Tag options for the question form

use crate::types::{Company, Course, Topic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selected tag, carrying the id of the tagged document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "id", rename_all = "lowercase")]
pub enum TagSelection {
    Course(String),
    Topic(String),
    Company(String),
}

impl TagSelection {
    /// Parse a raw `(category, id)` pair; unknown categories give `None`
    pub fn from_pair(category: &str, id: impl Into<String>) -> Option<Self> {
        match category {
            "course" => Some(TagSelection::Course(id.into())),
            "topic" => Some(TagSelection::Topic(id.into())),
            "company" => Some(TagSelection::Company(id.into())),
            _ => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            TagSelection::Course(_) => "course",
            TagSelection::Topic(_) => "topic",
            TagSelection::Company(_) => "company",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            TagSelection::Course(id) | TagSelection::Topic(id) | TagSelection::Company(id) => id,
        }
    }
}

impl fmt::Display for TagSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category(), self.id())
    }
}

/// A selectable tag with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub value: TagSelection,
    pub label: String,
}

/// Options of one category, under a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub label: &'static str,
    pub options: Vec<TagOption>,
}

/// Group the three tag sources for a picker: courses, topics, companies
pub fn tag_groups(courses: &[Course], topics: &[Topic], companies: &[Company]) -> Vec<TagGroup> {
    vec![
        TagGroup {
            label: "Courses",
            options: courses
                .iter()
                .map(|course| TagOption {
                    value: TagSelection::Course(course.id.clone()),
                    label: course.label(),
                })
                .collect(),
        },
        TagGroup {
            label: "Topics",
            options: topics
                .iter()
                .map(|topic| TagOption {
                    value: TagSelection::Topic(topic.id.clone()),
                    label: topic.topic_name.clone(),
                })
                .collect(),
        },
        TagGroup {
            label: "Companies",
            options: companies
                .iter()
                .map(|company| TagOption {
                    value: TagSelection::Company(company.id.clone()),
                    label: company.company_name.clone(),
                })
                .collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair() {
        assert_eq!(
            TagSelection::from_pair("course", "c1"),
            Some(TagSelection::Course("c1".to_string()))
        );
        assert_eq!(
            TagSelection::from_pair("company", "x"),
            Some(TagSelection::Company("x".to_string()))
        );
        assert_eq!(TagSelection::from_pair("school", "s1"), None);
        assert_eq!(TagSelection::from_pair("Course", "c1"), None);
    }

    #[test]
    fn test_tag_groups_labels_and_order() {
        let courses = vec![Course {
            id: "c1".to_string(),
            course_name: "Data Structures".to_string(),
            course_number: "CS 61B".to_string(),
            questions: Vec::new(),
        }];
        let topics = vec![Topic {
            id: "t1".to_string(),
            topic_name: "Graphs".to_string(),
            questions: Vec::new(),
        }];
        let companies = vec![Company {
            id: "x1".to_string(),
            company_name: "Acme".to_string(),
            questions: Vec::new(),
        }];

        let groups = tag_groups(&courses, &topics, &companies);
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, ["Courses", "Topics", "Companies"]);
        assert_eq!(groups[0].options[0].label, "CS 61B: Data Structures");
        assert_eq!(groups[1].options[0].value, TagSelection::Topic("t1".to_string()));
        assert_eq!(groups[2].options[0].label, "Acme");
    }

    #[test]
    fn test_selection_serializes_with_category() {
        let value = serde_json::to_value(TagSelection::Topic("t1".to_string())).unwrap();
        assert_eq!(value, serde_json::json!({"category": "topic", "id": "t1"}));
    }
}
