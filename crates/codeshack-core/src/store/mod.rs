//! Shared application state
//!
//! State changes only through [`Action`]s applied by [`AppState::reduce`].
//! The [`Store`] handle is cloned into whatever needs to read or dispatch.

mod action;
mod state;

pub use action::Action;
pub use state::AppState;

use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to the application state
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    pub fn dispatch(&self, action: Action) {
        tracing::trace!(action = action.name(), "dispatch");
        self.state.write().reduce(action);
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Read a slice of the state without copying all of it
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state.read())
    }
}
