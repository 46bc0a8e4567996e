//! Action creators
//!
//! Each operation wraps one backend interaction: it calls the API client and
//! dispatches the resulting state updates. Failure handling is per call site:
//! loaders log and stop loading, authoring calls hand the error back, and
//! background bookkeeping (history) logs and drops it.

mod comments;
mod loaders;
mod users;

use crate::api::ApiClient;
use crate::auth::resolve_session;
use crate::config::Config;
use crate::error::CodeShackResult;
use crate::store::Store;

/// API client paired with the store it updates
#[derive(Clone)]
pub struct Actions {
    api: ApiClient,
    store: Store,
}

impl Actions {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Wire up a session, API client and empty store from configuration
    pub fn connect(config: &Config) -> CodeShackResult<Self> {
        let session = resolve_session(config)?;
        let api = ApiClient::new(config, session)?;
        Ok(Self::new(api, Store::new()))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
