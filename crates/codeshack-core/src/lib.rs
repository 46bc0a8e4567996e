//! CodeShack Core Library
//!
//! This crate provides the client side of CodeShack: the authenticated REST
//! client, the application store and its action creators, and the question
//! authoring form.

pub mod actions;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod navigation;
pub mod richtext;
pub mod store;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use actions::Actions;
pub use api::ApiClient;
pub use auth::{
    AnonymousSession, CredentialStore, IdentityProvider, IdentitySession, RefreshTokenSession,
    StaticTokenSession, request_config, resolve_session,
};
pub use config::{Config, LoggingConfig, load_config, load_config_with_overrides};
pub use error::{CodeShackError, CodeShackResult};
pub use form::{QuestionForm, TagGroup, TagOption, TagSelection, tag_groups};
pub use navigation::{History, Navigator, Route};
pub use richtext::RichTextDocument;
pub use store::{Action, AppState, Store};
pub use types::*;
