//! The [`NodeManager`] implementation.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{error, info, warn};

use node_core::LightningNode;

use crate::error::{ManagerError, NotReady};
use crate::state::NodeState;

/// Owns the process-wide node handle and enforces its state machine.
///
/// The state lives behind a single `RwLock`; transitions take the write
/// half for their whole duration, and [`access`](Self::access) hands
/// out the read half for the life of a request. A stop transition can
/// therefore never begin while a handler is still holding the node.
pub struct NodeManager {
    node: Arc<dyn LightningNode>,
    state: RwLock<NodeState>,
}

/// Read access to the running node.
///
/// Holds the state read-lock until dropped, which keeps the request it
/// belongs to mutually exclusive with lifecycle transitions.
pub struct NodeAccess<'a> {
    node: &'a Arc<dyn LightningNode>,
    _state: RwLockReadGuard<'a, NodeState>,
}

impl std::fmt::Debug for NodeAccess<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeAccess").finish_non_exhaustive()
    }
}

impl Deref for NodeAccess<'_> {
    type Target = Arc<dyn LightningNode>;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

impl NodeManager {
    /// Wrap a node backend; the manager starts `Uninitialized`.
    pub fn new(node: Arc<dyn LightningNode>) -> Self {
        Self {
            node,
            state: RwLock::new(NodeState::Uninitialized),
        }
    }

    /// Start the node, transitioning `Uninitialized -> Starting ->
    /// Running` and returning its `node_id`.
    ///
    /// A startup error leaves the manager `Failed`, which is terminal:
    /// the caller must not begin serving node-dependent traffic.
    /// Calling this more than once is an error.
    pub async fn start(&self, data_dir: &Path) -> Result<String, ManagerError> {
        let mut state = self.state.write().await;
        if *state != NodeState::Uninitialized {
            return Err(ManagerError::AlreadyStarted(*state));
        }

        *state = NodeState::Starting;
        info!(data_dir = %data_dir.display(), "Starting Lightning node");

        match self.node.start(data_dir).await {
            Ok(node_id) => {
                *state = NodeState::Running;
                info!(%node_id, "Lightning node started");
                Ok(node_id)
            }
            Err(err) => {
                *state = NodeState::Failed;
                error!(error = %err, "Failed to start Lightning node");
                Err(ManagerError::Startup(err))
            }
        }
    }

    /// Stop the node. Idempotent and infallible: stop errors from the
    /// backend are logged and swallowed, and the manager always ends in
    /// a terminal state.
    ///
    /// Waits for in-flight [`NodeAccess`] guards to drop before the
    /// transition begins.
    pub async fn stop(&self) {
        let mut state = self.state.write().await;
        match *state {
            NodeState::Stopped | NodeState::Failed => {}
            NodeState::Running => {
                *state = NodeState::Stopping;
                info!("Stopping Lightning node");
                if let Err(err) = self.node.stop().await {
                    warn!(error = %err, "Error stopping Lightning node");
                }
                *state = NodeState::Stopped;
                info!("Lightning node stopped");
            }
            NodeState::Uninitialized | NodeState::Starting | NodeState::Stopping => {
                *state = NodeState::Stopped;
            }
        }
    }

    /// Acquire the node for one request.
    ///
    /// Succeeds only while `Running`; otherwise reports the current
    /// state so callers can surface it.
    pub async fn access(&self) -> Result<NodeAccess<'_>, NotReady> {
        let state = self.state.read().await;
        if *state == NodeState::Running {
            Ok(NodeAccess {
                node: &self.node,
                _state: state,
            })
        } else {
            Err(NotReady(*state))
        }
    }

    /// Snapshot of the current lifecycle state.
    pub async fn state(&self) -> NodeState {
        *self.state.read().await
    }
}
