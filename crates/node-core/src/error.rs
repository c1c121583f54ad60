//! Error types for node backends.

use thiserror::Error;

/// Errors raised by a Lightning node backend.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The node failed to come up.
    #[error("node failed to start: {0}")]
    Startup(String),

    /// An operation was attempted while the node is not running.
    #[error("node is not running")]
    NotRunning,

    /// The backend rejected or failed an operation.
    #[error("lightning backend error: {0}")]
    Backend(String),
}
