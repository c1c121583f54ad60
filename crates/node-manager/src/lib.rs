//! Lifecycle manager for the single shared Lightning node.
//!
//! Exactly one [`NodeManager`] exists per process. It owns the node
//! handle, drives the state machine
//! `Uninitialized -> Starting -> Running -> Stopping -> Stopped`
//! (or `-> Failed` on a startup error), and gates all request access
//! through [`NodeManager::access`]. The state lock it hands out keeps
//! in-flight request handlers and the stop transition mutually
//! exclusive.

mod error;
mod manager;
mod state;

pub use error::{ManagerError, NotReady};
pub use manager::{NodeAccess, NodeManager};
pub use state::NodeState;
