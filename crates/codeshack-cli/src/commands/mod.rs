//! CLI commands

pub mod auth;
pub mod catalog;
pub mod comment;
pub mod config;
pub mod question;

use crate::console::CLIConsole;
use codeshack_core::{Actions, CodeShackError, CodeShackResult};
use std::future::Future;

/// Show a spinner while a loader runs
pub(crate) async fn with_spinner<F>(console: &mut CLIConsole, message: &str, load: F) -> F::Output
where
    F: Future,
{
    console.start_progress(message);
    let output = load.await;
    console.finish_progress();
    output
}

/// Load the backend user behind the active session, if there is one
///
/// Returns whether a user is now signed in. Failures are reported as a
/// warning and leave the caller anonymous.
pub(crate) async fn load_signed_in_user(console: &CLIConsole, actions: &Actions) -> bool {
    if actions.api().session().current_user().is_none() {
        return false;
    }
    match actions.login_user().await {
        Ok(()) => true,
        Err(e) => {
            console.warn(&format!("Could not load your account: {}", e));
            false
        }
    }
}

/// Turn a failed interactive prompt into an error
pub(crate) fn prompt_error(error: dialoguer::Error) -> CodeShackError {
    CodeShackError::io(format!("Prompt failed: {}", error))
}

/// Fail when the previous load left nothing in the store
pub(crate) fn loaded<T>(value: Option<T>, what: &str, id: &str) -> CodeShackResult<T> {
    value.ok_or_else(|| {
        CodeShackError::not_found_resource(what, format!("{} '{}' not found", what, id))
    })
}
