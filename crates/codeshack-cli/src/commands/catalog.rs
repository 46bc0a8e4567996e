//! Course, topic and company commands

use super::{load_signed_in_user, loaded, with_spinner};
use crate::console::CLIConsole;
use codeshack_core::views::{question_rows, topics_by_question_count};
use codeshack_core::{
    Actions, CodeShackError, CodeShackResult, CoursePatch, NewCompany, NewCourse, NewTopic,
    Populated, Question,
};
use colored::*;

/// List all courses
pub async fn list_courses(console: &mut CLIConsole, actions: &Actions) -> CodeShackResult<()> {
    with_spinner(console, "Loading courses", actions.load_all_courses()).await?;
    let courses = actions.store().select(|s| s.courses.clone());

    console.print_header("Courses");
    if courses.is_empty() {
        console.line("No courses yet");
    }
    for course in &courses {
        console.print_item(&course.id, &course.label());
    }
    Ok(())
}

/// Show a course and its questions
pub async fn show_course(
    console: &mut CLIConsole,
    actions: &Actions,
    id: &str,
) -> CodeShackResult<()> {
    with_spinner(console, "Loading course", actions.load_course(id)).await?;
    let course = loaded(actions.store().select(|s| s.current_course.clone()), "course", id)?;

    console.print_header(&course.label());
    print_questions(console, &course.questions);
    Ok(())
}

/// Create a course
pub async fn create_course(
    console: &mut CLIConsole,
    actions: &Actions,
    number: String,
    name: String,
) -> CodeShackResult<()> {
    let course = NewCourse {
        course_name: name,
        course_number: number,
    };
    let created = with_spinner(console, "Creating course", actions.create_course(&course)).await?;
    console.success(&format!("Created course {} ({})", created.label(), created.id));
    Ok(())
}

/// Change a course's name or number
pub async fn rename_course(
    console: &mut CLIConsole,
    actions: &Actions,
    id: &str,
    name: Option<String>,
    number: Option<String>,
) -> CodeShackResult<()> {
    if name.is_none() && number.is_none() {
        return Err(CodeShackError::invalid_input(
            "Nothing to change: pass --name and/or --number",
        ));
    }
    let patch = CoursePatch {
        course_name: name,
        course_number: number,
    };
    let updated =
        with_spinner(console, "Updating course", actions.update_course(id, &patch)).await?;
    console.success(&format!("Course is now {}", updated.label()));
    Ok(())
}

/// Attach an existing question to a course
pub async fn add_question_to_course(
    console: &mut CLIConsole,
    actions: &Actions,
    course_id: &str,
    question_id: &str,
) -> CodeShackResult<()> {
    actions.add_question_to_course(course_id, question_id).await?;
    console.success(&format!("Added question {} to course {}", question_id, course_id));
    Ok(())
}

/// List topics, most questions first
pub async fn list_topics(console: &mut CLIConsole, actions: &Actions) -> CodeShackResult<()> {
    with_spinner(console, "Loading topics", actions.load_all_topics()).await?;
    let topics = actions.store().select(|s| s.topics.clone());

    console.print_header("Topics");
    for topic in topics_by_question_count(&topics) {
        let count = format!("({})", topic.questions.len());
        console.print_item(&topic.id, &format!("{} {}", topic.topic_name, count.dimmed()));
    }
    Ok(())
}

/// Show a topic and its questions
pub async fn show_topic(
    console: &mut CLIConsole,
    actions: &Actions,
    id: &str,
) -> CodeShackResult<()> {
    with_spinner(console, "Loading topic", actions.load_topic(id)).await?;
    let topic = loaded(actions.store().select(|s| s.current_topic.clone()), "topic", id)?;

    console.print_header(&topic.topic_name);
    print_questions(console, &topic.questions);
    Ok(())
}

/// Create a topic; only administrators may
pub async fn create_topic(
    console: &mut CLIConsole,
    actions: &Actions,
    name: String,
) -> CodeShackResult<()> {
    load_signed_in_user(console, actions).await;
    if !actions.store().select(|s| s.is_admin()) {
        return Err(CodeShackError::auth("Only administrators can create topics"));
    }

    let topic = NewTopic { topic_name: name };
    let created = with_spinner(console, "Creating topic", actions.create_topic(&topic)).await?;
    console.success(&format!("Created topic {} ({})", created.topic_name, created.id));
    console.info(&format!(
        "{} topics in total",
        actions.store().select(|s| s.topics.len())
    ));
    Ok(())
}

/// List all companies
pub async fn list_companies(console: &mut CLIConsole, actions: &Actions) -> CodeShackResult<()> {
    with_spinner(console, "Loading companies", actions.load_all_companies()).await?;
    let companies = actions.store().select(|s| s.companies.clone());

    console.print_header("Companies");
    if companies.is_empty() {
        console.line("No companies yet");
    }
    for company in &companies {
        console.print_item(&company.id, &company.company_name);
    }
    Ok(())
}

/// Show a company and its questions
pub async fn show_company(
    console: &mut CLIConsole,
    actions: &Actions,
    id: &str,
) -> CodeShackResult<()> {
    with_spinner(console, "Loading company", actions.load_company(id)).await?;
    let company = loaded(actions.store().select(|s| s.current_company.clone()), "company", id)?;

    console.print_header(&company.company_name);
    print_questions(console, &company.questions);
    Ok(())
}

/// Create a company
pub async fn create_company(
    console: &mut CLIConsole,
    actions: &Actions,
    name: String,
) -> CodeShackResult<()> {
    let company = NewCompany { company_name: name };
    let created =
        with_spinner(console, "Creating company", actions.create_company(&company)).await?;
    console.success(&format!("Created company {} ({})", created.company_name, created.id));
    Ok(())
}

fn print_questions(console: &CLIConsole, questions: &[Populated<Question>]) {
    if questions.is_empty() {
        console.line("No questions yet");
        return;
    }
    for row in question_rows(questions) {
        console.print_item(&row.id, &row.name.bold().to_string());
        if !row.description.is_empty() {
            console.print_block(&row.description);
        }
    }
}
