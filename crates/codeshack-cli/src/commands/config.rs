//! Configuration management commands

use crate::console::CLIConsole;
use codeshack_core::config::save_to_file;
use codeshack_core::{CodeShackError, CodeShackResult, Config, CredentialStore};
use colored::*;
use std::path::Path;

/// Show the effective configuration
pub fn show(console: &CLIConsole, config: &Config) -> CodeShackResult<()> {
    console.print_header("Configuration");
    console.line(&format!("API URL: {}", config.api_url.green()));
    console.line(&format!(
        "Timeouts: connect {}s, request {}s",
        config.connect_timeout().as_secs(),
        config.request_timeout().as_secs()
    ));

    console.print_header("Identity");
    console.line(&format!("Token endpoint: {}", config.identity.token_endpoint()));
    console.line(&format!("Accounts endpoint: {}", config.identity.accounts_endpoint()));
    console.line(&format!("API key: {}", set_or_not(config.identity.api_key.is_some())));
    console.line(&format!("Fixed token: {}", set_or_not(config.identity.id_token.is_some())));
    if let Some(store) = CredentialStore::from_config(config) {
        let signed_in = store.load().ok().flatten().map(|c| c.email);
        console.line(&format!("Credentials: {}", store.path().display()));
        match signed_in {
            Some(email) => console.line(&format!("Signed in as: {}", email.cyan())),
            None => console.line(&format!("Signed in as: {}", "nobody".dimmed())),
        }
    }

    console.print_header("Logging");
    console.line(&format!("Level: {}", config.logging.level));
    console.line(&format!("Format: {}", config.logging.format));
    if let Some(file) = &config.logging.log_file {
        console.line(&format!("File: {}", file.display()));
    }
    Ok(())
}

/// Write a configuration file with default settings
pub fn init(console: &CLIConsole, path: &Path, force: bool) -> CodeShackResult<()> {
    if path.exists() && !force {
        console.info("Use --force to overwrite");
        return Err(CodeShackError::config(format!(
            "Configuration file already exists: {}",
            path.display()
        )));
    }

    save_to_file(&Config::default(), path)?;
    console.success(&format!("Created configuration file: {}", path.display()));
    console.line("Set identity.api_key before signing in");
    Ok(())
}

fn set_or_not(set: bool) -> ColoredString {
    if set { "✓ Set".green() } else { "✗ Not set".red() }
}
