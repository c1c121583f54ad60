//! Error types for the lifecycle manager.

use thiserror::Error;

use node_core::NodeError;

use crate::state::NodeState;

/// Errors raised by lifecycle transitions.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The node failed to start; the manager is now `Failed` and the
    /// process should not begin serving.
    #[error("node startup failed: {0}")]
    Startup(#[from] NodeError),

    /// `start` was called more than once in this process lifetime.
    #[error("node already started (state: {0})")]
    AlreadyStarted(NodeState),
}

/// The node is not in the `Running` state; carries the state it was in.
#[derive(Debug, Clone, Copy, Error)]
#[error("node not ready (state: {0})")]
pub struct NotReady(pub NodeState);
