//! Application state for the statuswatch server.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;

use statuswatch_store::StatusStore;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Holds the resources handlers and middleware need: the server
/// configuration (credentials included) and the status datastore.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Status datastore
    pub store: Arc<dyn StatusStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: ServerConfig, store: Arc<dyn StatusStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
