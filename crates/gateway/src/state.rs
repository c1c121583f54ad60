//! Application state shared across handlers.

use std::sync::Arc;

use node_manager::NodeManager;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lifecycle manager guarding the node handle.
    pub manager: Arc<NodeManager>,
}

impl AppState {
    /// Create new application state.
    pub fn new(manager: Arc<NodeManager>) -> Self {
        Self { manager }
    }
}
