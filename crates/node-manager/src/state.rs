//! The node lifecycle state machine.

use std::fmt;

/// Lifecycle state of the process-wide node.
///
/// Transitions happen only inside [`NodeManager`](crate::NodeManager):
/// `Uninitialized -> Starting -> Running -> Stopping -> Stopped`, with
/// `Starting -> Failed` on a startup error. `Stopped` and `Failed` are
/// terminal; the process exits afterwards and restart is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Uninitialized,
    Starting,
    Running,
    Stopping,
    Stopped,
    Failed,
}

impl NodeState {
    /// Lowercase name, as surfaced in HTTP responses and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Uninitialized => "uninitialized",
            NodeState::Starting => "starting",
            NodeState::Running => "running",
            NodeState::Stopping => "stopping",
            NodeState::Stopped => "stopped",
            NodeState::Failed => "failed",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
