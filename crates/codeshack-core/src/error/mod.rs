//! Error types for CodeShack
//!
//! Every fallible operation in the core library returns [`CodeShackResult`].
//! Call sites decide what to do with a failure (log it, flip a UI flag or hand
//! it to the caller); the error type only carries enough detail to tell the
//! failures apart.

mod constructors;
mod conversions;
mod types;

pub use types::{CodeShackError, CodeShackResult, OptionExt, ResultExt};
