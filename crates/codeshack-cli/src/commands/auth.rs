//! Sign-in, sign-up and account commands

use super::{prompt_error, with_spinner};
use crate::console::CLIConsole;
use codeshack_core::auth::StoredCredentials;
use codeshack_core::{
    Actions, CodeShackError, CodeShackResult, Config, CredentialStore, IdentityProvider, NewUser,
};
use colored::*;
use dialoguer::{Input, Password, theme::ColorfulTheme};

/// Sign in with email and password and store the session
pub async fn login(
    console: &mut CLIConsole,
    config: &Config,
    email: Option<String>,
) -> CodeShackResult<()> {
    let store = credential_store(config)?;
    let email = email_or_prompt(email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    let provider = IdentityProvider::new(config)?;
    let credentials = with_spinner(
        console,
        "Signing in",
        provider.sign_in_with_password(&email, &password),
    )
    .await?;
    store.store(&credentials)?;

    let actions = Actions::connect(config)?;
    match actions.login_user().await {
        Ok(()) => {
            console.success(&format!("Signed in as {}", email));
            Ok(())
        }
        Err(e) => {
            console.error(&format!(
                "Signed in, but the account could not be loaded ({})",
                status(&e)
            ));
            Err(e)
        }
    }
}

/// Create an account and its backend user record
pub async fn signup(
    console: &mut CLIConsole,
    config: &Config,
    email: Option<String>,
) -> CodeShackResult<()> {
    let store = credential_store(config)?;
    let email = email_or_prompt(email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(prompt_error)?;

    let provider = IdentityProvider::new(config)?;
    let credentials: StoredCredentials =
        with_spinner(console, "Creating account", provider.sign_up(&email, &password)).await?;
    store.store(&credentials)?;

    let actions = Actions::connect(config)?;
    actions
        .signup_user(&NewUser {
            email: credentials.email.clone(),
        })
        .await?;
    console.success(&format!("Welcome, {}", credentials.email));
    Ok(())
}

/// Show the signed-in user
pub async fn whoami(console: &mut CLIConsole, actions: &Actions) -> CodeShackResult<()> {
    let Some(session_user) = actions.api().session().current_user() else {
        console.line("Not signed in");
        return Ok(());
    };

    if let Err(e) = with_spinner(console, "Loading account", actions.login_user()).await {
        console.error(&format!("Could not load account ({})", status(&e)));
        return Err(e);
    }

    let state = actions.store().snapshot();
    if let Some(user) = &state.auth_user {
        let email = if user.email.is_empty() {
            &session_user.email
        } else {
            &user.email
        };
        console.line(&format!("{} ({})", email.cyan(), user.id.dimmed()));
        if state.is_admin() {
            console.line(&format!("Role: {}", "admin".yellow()));
        }
        console.info(&format!("{} question(s) in history", user.history.len()));
    }
    Ok(())
}

/// Forget stored credentials
pub fn logout(console: &CLIConsole, config: &Config) -> CodeShackResult<()> {
    credential_store(config)?.clear()?;
    console.success("Signed out");
    Ok(())
}

fn credential_store(config: &Config) -> CodeShackResult<CredentialStore> {
    CredentialStore::from_config(config).ok_or_else(|| {
        CodeShackError::config_with_context(
            "No place to store credentials",
            "Set identity.credentials_file or CODESHACK_CREDENTIALS_FILE",
        )
    })
}

fn email_or_prompt(email: Option<String>) -> CodeShackResult<String> {
    match email {
        Some(email) => Ok(email),
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()
            .map_err(prompt_error),
    }
}

fn status(error: &CodeShackError) -> String {
    match error.status_code() {
        Some(code) => format!("HTTP {}", code),
        None => error.error_code().to_string(),
    }
}
