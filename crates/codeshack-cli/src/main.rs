//! CodeShack CLI application
//!
//! Browse interview questions by course, topic and company, and write new
//! ones, from the terminal.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/codeshack-cli
//! ```
//!
//! Configuration is read from `codeshack.json` (or `~/.codeshack/config.json`),
//! then `CODESHACK_*` environment variables, then the global flags.
//! Run `codeshack config init` to write a starting file.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;
use codeshack_core::config::load_config_with_overrides;
use codeshack_core::error::CodeShackResult;

use args::Cli;

#[tokio::main]
async fn main() -> CodeShackResult<()> {
    let cli = Cli::parse();

    let config = load_config_with_overrides(cli.config_file.as_deref(), cli.config_overrides())?;
    logging::init(&config.logging)?;
    tracing::debug!(api_url = %config.api_url, "Loaded configuration");

    router::route(cli, config).await
}
