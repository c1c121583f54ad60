//! Deterministic in-memory node implementation.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use node_core::{BalanceSnapshot, LightningNode, NodeError, NodeEvent};

/// A deterministic in-memory node.
///
/// Balances and events are set by the test; invoices and addresses are
/// generated from counters so repeated calls never collide. Every
/// operation increments a call counter, which lets tests assert that a
/// rejected request never reached the node.
pub struct MockNode {
    node_id: String,
    started: AtomicBool,
    fail_stop: AtomicBool,
    fail_requests: AtomicBool,
    balances: Mutex<BalanceSnapshot>,
    events: Mutex<Vec<NodeEvent>>,
    last_description: Mutex<Option<String>>,
    invoice_seq: AtomicU64,
    address_seq: AtomicU64,
    invoice_calls: AtomicUsize,
    address_calls: AtomicUsize,
}

impl Default for MockNode {
    fn default() -> Self {
        Self {
            node_id: "02mocknode000000000000000000000000000000000000000000000000000000".to_string(),
            started: AtomicBool::new(false),
            fail_stop: AtomicBool::new(false),
            fail_requests: AtomicBool::new(false),
            balances: Mutex::new(BalanceSnapshot::default()),
            events: Mutex::new(Vec::new()),
            last_description: Mutex::new(None),
            invoice_seq: AtomicU64::new(0),
            address_seq: AtomicU64::new(0),
            invoice_calls: AtomicUsize::new(0),
            address_calls: AtomicUsize::new(0),
        }
    }
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node that starts with the given balances.
    pub fn with_balances(onchain_sats: u64, lightning_sats: u64) -> Self {
        let node = Self::new();
        node.set_balances(onchain_sats, lightning_sats);
        node
    }

    /// Replace the reported balances.
    pub fn set_balances(&self, onchain_sats: u64, lightning_sats: u64) {
        *self.balances.lock().unwrap_or_else(PoisonError::into_inner) = BalanceSnapshot {
            onchain_sats,
            lightning_sats,
        };
    }

    /// Queue an event for the next `process_events` call.
    pub fn push_event(&self, event: NodeEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Make the next `stop` call report a backend error.
    pub fn fail_stop(&self) {
        self.fail_stop.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent query fail with a backend error.
    pub fn fail_requests(&self) {
        self.fail_requests.store(true, Ordering::SeqCst);
    }

    /// How many times `generate_invoice` has been called.
    pub fn invoice_calls(&self) -> usize {
        self.invoice_calls.load(Ordering::SeqCst)
    }

    /// How many times `get_new_address` has been called.
    pub fn address_calls(&self) -> usize {
        self.address_calls.load(Ordering::SeqCst)
    }

    /// The description passed to the most recent invoice call.
    pub fn last_invoice_description(&self) -> Option<String> {
        self.last_description
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn ensure_running(&self) -> Result<(), NodeError> {
        if !self.started.load(Ordering::SeqCst) {
            return Err(NodeError::NotRunning);
        }
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(NodeError::Backend("mock backend failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LightningNode for MockNode {
    async fn start(&self, _data_dir: &Path) -> Result<String, NodeError> {
        self.started.store(true, Ordering::SeqCst);
        Ok(self.node_id.clone())
    }

    async fn stop(&self) -> Result<(), NodeError> {
        self.started.store(false, Ordering::SeqCst);
        if self.fail_stop.swap(false, Ordering::SeqCst) {
            return Err(NodeError::Backend("mock stop failure".to_string()));
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn node_id(&self) -> Result<String, NodeError> {
        self.ensure_running()?;
        Ok(self.node_id.clone())
    }

    async fn get_balances(&self) -> Result<BalanceSnapshot, NodeError> {
        self.ensure_running()?;
        Ok(*self.balances.lock().unwrap_or_else(PoisonError::into_inner))
    }

    async fn generate_invoice(
        &self,
        amount_sats: u64,
        description: &str,
    ) -> Result<String, NodeError> {
        self.invoice_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_running()?;

        *self
            .last_description
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(description.to_string());

        let seq = self.invoice_seq.fetch_add(1, Ordering::SeqCst);
        Ok(format!("lnbc{amount_sats}n1pmock{seq:06}"))
    }

    async fn get_new_address(&self) -> Result<String, NodeError> {
        self.address_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_running()?;

        let seq = self.address_seq.fetch_add(1, Ordering::SeqCst);
        Ok(format!("bc1qmock{seq:06}"))
    }

    async fn process_events(&self) -> Result<Vec<NodeEvent>, NodeError> {
        self.ensure_running()?;
        Ok(std::mem::take(
            &mut *self.events.lock().unwrap_or_else(PoisonError::into_inner),
        ))
    }
}
