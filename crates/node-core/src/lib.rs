//! Core trait and types for Lightning node backends.
//!
//! This crate defines the boundary between the HTTP gateway and the
//! underlying Bitcoin/Lightning node implementation:
//!
//! - [`LightningNode`] - The trait every node backend must implement
//! - [`BalanceSnapshot`] / [`NodeEvent`] - Data surfaced by the node
//! - [`NodeError`] - Error type for node operations
//!
//! The gateway only ever talks to `Arc<dyn LightningNode>`; swapping the
//! real node for a mock is a construction-time decision.
//!
//! # Example
//!
//! ```rust
//! use node_core::{async_trait, BalanceSnapshot, LightningNode, NodeError, NodeEvent};
//! use std::path::Path;
//!
//! struct NullNode;
//!
//! #[async_trait]
//! impl LightningNode for NullNode {
//!     async fn start(&self, _data_dir: &Path) -> Result<String, NodeError> {
//!         Err(NodeError::Startup("null node cannot start".to_string()))
//!     }
//!
//!     async fn stop(&self) -> Result<(), NodeError> {
//!         Ok(())
//!     }
//!
//!     fn is_running(&self) -> bool {
//!         false
//!     }
//!
//!     fn node_id(&self) -> Result<String, NodeError> {
//!         Err(NodeError::NotRunning)
//!     }
//!
//!     async fn get_balances(&self) -> Result<BalanceSnapshot, NodeError> {
//!         Err(NodeError::NotRunning)
//!     }
//!
//!     async fn generate_invoice(
//!         &self,
//!         _amount_sats: u64,
//!         _description: &str,
//!     ) -> Result<String, NodeError> {
//!         Err(NodeError::NotRunning)
//!     }
//!
//!     async fn get_new_address(&self) -> Result<String, NodeError> {
//!         Err(NodeError::NotRunning)
//!     }
//!
//!     async fn process_events(&self) -> Result<Vec<NodeEvent>, NodeError> {
//!         Err(NodeError::NotRunning)
//!     }
//! }
//! ```

mod error;
mod trait_def;
mod types;

#[cfg(feature = "ldk")]
pub mod ldk;

pub use error::NodeError;
pub use trait_def::LightningNode;
pub use types::{BalanceSnapshot, NodeEvent};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
