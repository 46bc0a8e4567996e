//! Question commands

use super::{load_signed_in_user, loaded, prompt_error, with_spinner};
use crate::args::QuestionArgs;
use crate::console::CLIConsole;
use codeshack_core::error::ResultExt;
use codeshack_core::richtext::describe;
use codeshack_core::{
    Actions, CodeShackError, CodeShackResult, History, Populated, QuestionForm,
    RichTextDocument, TagSelection, tag_groups,
};
use colored::*;
use dialoguer::{Editor, Input, MultiSelect, theme::ColorfulTheme};
use std::path::Path;

/// Show a question with its solution and comments
pub async fn show(console: &mut CLIConsole, actions: &Actions, id: &str) -> CodeShackResult<()> {
    with_spinner(console, "Loading question", actions.load_question(id)).await?;
    let question = loaded(actions.store().select(|s| s.current_question.clone()), "question", id)?;

    console.print_header(&question.name);
    console.print_block(&describe(&question.content));

    let tags: Vec<String> = question
        .courses
        .iter()
        .map(|c| c.document().map_or_else(|| c.id().to_string(), |c| c.label()))
        .chain(question.topics.iter().map(|t| {
            t.document()
                .map_or_else(|| t.id().to_string(), |t| t.topic_name.clone())
        }))
        .chain(question.companies.iter().map(|c| {
            c.document()
                .map_or_else(|| c.id().to_string(), |c| c.company_name.clone())
        }))
        .collect();
    if !tags.is_empty() {
        console.line(&format!("Tags: {}", tags.join(", ").cyan()));
    }

    console.print_separator();
    console.line(&"Solution".bold().to_string());
    console.print_block(&describe(&question.solution));

    if !question.comments.is_empty() {
        console.print_separator();
        console.line(&format!("{} comment(s)", question.comments.len()).bold().to_string());
        for comment in &question.comments {
            match comment {
                Populated::Document(comment) => {
                    console.print_item(&comment.id, &describe(&comment.content))
                }
                Populated::Id(id) => console.print_item(id, ""),
            }
        }
    }
    Ok(())
}

/// Write a new question, prompting for anything not given as a flag
pub async fn create(
    console: &mut CLIConsole,
    actions: &Actions,
    args: QuestionArgs,
) -> CodeShackResult<()> {
    let interactive = !args.no_input;
    let mut form = QuestionForm::new();

    let title = match args.title {
        Some(title) => title,
        None if interactive => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Title")
            .interact_text()
            .map_err(prompt_error)?,
        None => String::new(),
    };
    form.set_title(title.trim());

    let content_file = args.content_file.as_deref();
    if let Some(content) = document(args.content, content_file, "question", interactive)? {
        form.set_content(content);
    }
    let solution_file = args.solution_file.as_deref();
    if let Some(solution) = document(args.solution, solution_file, "solution", interactive)? {
        form.set_solution(solution);
    }

    if args.tags.is_empty() && interactive {
        let selections = pick_tags(console, actions).await?;
        form.set_tags(&selections);
    } else {
        let pairs = parse_tag_pairs(console, &args.tags)?;
        form.set_tags_from_pairs(&pairs);
    }

    if !form.can_submit() {
        return Err(CodeShackError::invalid_input(
            "A question needs a title, content, a solution and at least one tag",
        ));
    }

    load_signed_in_user(console, actions).await;

    let mut history = History::new();
    let result =
        with_spinner(console, "Submitting question", form.submit(actions, &mut history)).await;
    match result {
        Ok(question) => {
            console.success(&format!("Created question {}", question.name));
            if let Some(path) = history.current() {
                console.line(&format!("  {}", path.cyan()));
            }
            Ok(())
        }
        Err(e) => {
            console.error("Error submitting question!");
            Err(e)
        }
    }
}

/// Resolve one document from a flag, a file, or the editor
fn document(
    text: Option<String>,
    file: Option<&Path>,
    what: &str,
    interactive: bool,
) -> CodeShackResult<Option<RichTextDocument>> {
    if let Some(text) = text {
        return Ok(Some(RichTextDocument::from_plain_text(&text)));
    }
    if let Some(file) = file {
        let raw = std::fs::read_to_string(file).map_err(|e| {
            CodeShackError::io_with_path(e.to_string(), file.display().to_string())
        })?;
        return Ok(Some(RichTextDocument::from_text_or_json(&raw)));
    }
    if !interactive {
        return Ok(None);
    }

    let template = format!("\n# Write the {} above. Lines starting with '#' are ignored.\n", what);
    let edited = Editor::new().edit(&template).context("Editor failed")?;
    Ok(edited.and_then(|raw| {
        let text: Vec<&str> = raw.lines().filter(|line| !line.starts_with('#')).collect();
        let text = text.join("\n");
        let text = text.trim();
        (!text.is_empty()).then(|| RichTextDocument::from_plain_text(text))
    }))
}

/// Interactive multi-select over courses, topics and companies
async fn pick_tags(
    console: &mut CLIConsole,
    actions: &Actions,
) -> CodeShackResult<Vec<TagSelection>> {
    with_spinner(console, "Loading tags", actions.load_tag_sources()).await?;
    let groups = actions
        .store()
        .select(|s| tag_groups(&s.courses, &s.topics, &s.companies));

    let options: Vec<_> = groups
        .iter()
        .flat_map(|group| {
            group
                .options
                .iter()
                .map(move |option| (format!("[{}] {}", group.label, option.label), option))
        })
        .collect();
    if options.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (space to select, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(prompt_error)?;

    Ok(chosen
        .into_iter()
        .map(|index| options[index].1.value.clone())
        .collect())
}

/// Split `category:id` flags, warning about unknown categories
fn parse_tag_pairs(
    console: &CLIConsole,
    tags: &[String],
) -> CodeShackResult<Vec<(String, String)>> {
    tags.iter()
        .map(|tag| {
            let (category, id) = tag.split_once(':').ok_or_else(|| {
                CodeShackError::invalid_field("tag", format!("'{}' is not category:id", tag))
            })?;
            if TagSelection::from_pair(category, id).is_none() {
                console.warn(&format!("Ignoring tag with unknown category '{}'", category));
            }
            Ok((category.to_string(), id.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_pairs() {
        let console = CLIConsole::new(false);
        let pairs = parse_tag_pairs(
            &console,
            &["topic:t1".to_string(), "school:s1".to_string()],
        )
        .unwrap();
        assert_eq!(pairs[0], ("topic".to_string(), "t1".to_string()));
        assert_eq!(pairs[1].0, "school");

        assert!(parse_tag_pairs(&console, &["no-separator".to_string()]).is_err());
    }

    #[test]
    fn test_document_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("content.txt");
        std::fs::write(&path, "Line one\nLine two").unwrap();

        let doc = document(None, Some(&path), "question", false).unwrap().unwrap();
        assert_eq!(doc.blocks.len(), 2);
        assert!(document(None, None, "question", false).unwrap().is_none());
    }
}
