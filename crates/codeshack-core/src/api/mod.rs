//! REST API client
//!
//! One method per backend endpoint. Every call derives a fresh auth header
//! through [`crate::auth::request_config`] before it is sent.

mod catalog;
mod client;
mod questions;
mod users;

pub use client::ApiClient;
