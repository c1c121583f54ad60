//! Mock Lightning node implementations for testing the gateway.
//!
//! This crate provides in-memory implementations of the
//! [`LightningNode`] trait:
//! - [`MockNode`] - Deterministic node with settable balances, queued
//!   events and per-operation call counters
//! - [`FailingNode`] - Every operation fails
//!
//! For a real backend, enable the `ldk` feature of `node-core` instead.
//!
//! # Example
//!
//! ```rust
//! use mock_node::{LightningNode, MockNode};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_node::NodeError> {
//!     let node = MockNode::new();
//!     let node_id = node.start(Path::new("./data")).await?;
//!     println!("node id: {node_id}");
//!
//!     let invoice = node.generate_invoice(1000, "Payment").await?;
//!     assert!(invoice.starts_with("lnbc"));
//!     Ok(())
//! }
//! ```

mod failing;
mod mock;

pub use failing::FailingNode;
pub use mock::MockNode;

// Re-export node-core types for convenience
pub use node_core::{async_trait, BalanceSnapshot, LightningNode, NodeError, NodeEvent};
