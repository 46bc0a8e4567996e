//! Comment commands

use super::{load_signed_in_user, loaded};
use crate::console::CLIConsole;
use codeshack_core::richtext::describe;
use codeshack_core::{Actions, CodeShackError, CodeShackResult, NewComment, Populated};

/// Show a comment and its replies
pub async fn show(console: &CLIConsole, actions: &Actions, id: &str) -> CodeShackResult<()> {
    // Comment loads are quiet; a miss surfaces as "not found" below
    let _ = actions.load_comment(id).await;
    let comment = loaded(actions.store().select(|s| s.current_comment.clone()), "comment", id)?;

    console.print_header(&format!("Comment {}", comment.id));
    if let Some(parent) = &comment.parent {
        console.info(&format!("In reply to {}", parent));
    }
    console.print_block(&describe(&comment.content));

    for reply in &comment.replies {
        match reply {
            Populated::Document(reply) => console.print_item(&reply.id, &describe(&reply.content)),
            Populated::Id(id) => console.print_item(id, ""),
        }
    }
    Ok(())
}

/// Comment on a question or reply to a comment
pub async fn add(
    console: &CLIConsole,
    actions: &Actions,
    question_id: &str,
    text: String,
    reply_to: Option<String>,
) -> CodeShackResult<()> {
    if text.trim().is_empty() {
        return Err(CodeShackError::invalid_field("text", "Comment is empty"));
    }

    load_signed_in_user(console, actions).await;
    let comment = NewComment {
        content: text,
        poster: actions.store().select(|s| s.user_id().map(str::to_string)),
        parent: reply_to,
    };

    match actions.create_comment_and_reply(&comment, question_id).await {
        Ok(created) => {
            console.success(&format!("Posted comment {}", created.id));
            Ok(())
        }
        Err(e @ CodeShackError::PartialFailure { rolled_back, .. }) => {
            if rolled_back {
                console.error("Comment could not be attached and was removed again");
            } else {
                console.error("Comment could not be attached and may be left orphaned");
            }
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Delete a comment
pub async fn delete(console: &CLIConsole, actions: &Actions, id: &str) -> CodeShackResult<()> {
    actions.delete_comment(id).await?;
    console.success(&format!("Deleted comment {}", id));
    Ok(())
}
