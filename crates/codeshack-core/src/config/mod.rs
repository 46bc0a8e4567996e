//! Configuration management for CodeShack

mod args_loader;
mod env_loader;
mod file_loader;
mod logging_config;
mod model;

pub mod loader;
pub mod timeouts;

pub use file_loader::{load_from_file, save_to_file};
pub use loader::{ConfigLoader, ConfigSource, load_config, load_config_with_overrides};
pub use logging_config::LoggingConfig;
pub use model::{
    Config, DEFAULT_ACCOUNTS_ENDPOINT, DEFAULT_API_URL, DEFAULT_TOKEN_ENDPOINT, IdentityConfig,
};
