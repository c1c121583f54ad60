//! HTTP integration tests for the gateway.
//!
//! Each test binds the full router to an ephemeral port with a mock
//! node backend and drives it over real HTTP.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use gateway::AppState;
use mock_node::{MockNode, NodeEvent};
use node_manager::NodeManager;

#[derive(Deserialize)]
struct BalancesBody {
    onchain_sats: u64,
    lightning_sats: u64,
    total_sats: u128,
}

struct TestGateway {
    addr: SocketAddr,
    node: Arc<MockNode>,
    manager: Arc<NodeManager>,
    client: reqwest::Client,
}

impl TestGateway {
    /// Spawn the gateway with a started node.
    async fn started() -> Self {
        let gateway = Self::stopped().await;
        gateway
            .manager
            .start(Path::new("./test-data"))
            .await
            .unwrap();
        gateway
    }

    /// Spawn the gateway without starting the node.
    async fn stopped() -> Self {
        let node = Arc::new(MockNode::new());
        let manager = Arc::new(NodeManager::new(node.clone()));

        let app = gateway::app(AppState::new(Arc::clone(&manager)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            node,
            manager,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_generate_invoice() {
    let gateway = TestGateway::started().await;

    let response = gateway
        .post_json(
            "/invoice",
            &json!({"amount_sats": 1000, "description": "Test payment"}),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let invoice = body["invoice"].as_str().unwrap();
    assert!(invoice.starts_with("lnbc"));
    assert_eq!(
        gateway.node.last_invoice_description().as_deref(),
        Some("Test payment")
    );
}

#[tokio::test]
async fn test_negative_amount_rejected_before_node_call() {
    let gateway = TestGateway::started().await;

    let response = gateway
        .post_json(
            "/invoice",
            &json!({"amount_sats": -1000, "description": "Test payment"}),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(gateway.node.invoice_calls(), 0);
}

#[tokio::test]
async fn test_zero_amount_rejected_before_node_call() {
    let gateway = TestGateway::started().await;

    let response = gateway.post_json("/invoice", &json!({"amount_sats": 0})).await;
    assert_eq!(response.status(), 400);
    assert_eq!(gateway.node.invoice_calls(), 0);
}

#[tokio::test]
async fn test_missing_amount_is_unprocessable() {
    let gateway = TestGateway::started().await;

    let response = gateway
        .post_json("/invoice", &json!({"description": "Test payment"}))
        .await;
    assert_eq!(response.status(), 422);
    assert_eq!(gateway.node.invoice_calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_unprocessable() {
    let gateway = TestGateway::started().await;

    let response = gateway
        .client
        .post(gateway.url("/invoice"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
    assert_eq!(gateway.node.invoice_calls(), 0);
}

#[tokio::test]
async fn test_description_defaults_when_absent_or_empty() {
    let gateway = TestGateway::started().await;

    let response = gateway.post_json("/invoice", &json!({"amount_sats": 21})).await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        gateway.node.last_invoice_description().as_deref(),
        Some("Payment")
    );

    let response = gateway
        .post_json("/invoice", &json!({"amount_sats": 21, "description": ""}))
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        gateway.node.last_invoice_description().as_deref(),
        Some("Payment")
    );
}

#[tokio::test]
async fn test_status_while_running() {
    let gateway = TestGateway::started().await;
    gateway.node.set_balances(1_500, 2_500);

    let response = gateway.get("/").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "running");
    assert!(!body["node_id"].as_str().unwrap().is_empty());
    assert_eq!(body["balances"]["onchain_sats"], 1_500);
    assert_eq!(body["balances"]["lightning_sats"], 2_500);
}

#[tokio::test]
async fn test_status_degrades_instead_of_failing() {
    let gateway = TestGateway::stopped().await;

    let response = gateway.get("/").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "uninitialized");
    assert!(body["node_id"].is_null());
    assert_eq!(body["balances"]["onchain_sats"], 0);
    assert_eq!(body["balances"]["lightning_sats"], 0);
}

#[tokio::test]
async fn test_node_endpoints_unavailable_before_start() {
    let gateway = TestGateway::stopped().await;

    for path in ["/address", "/balances", "/events"] {
        let response = gateway.get(path).await;
        assert_eq!(response.status(), 503, "{path}");
    }

    let response = gateway
        .post_json("/invoice", &json!({"amount_sats": 1000}))
        .await;
    assert_eq!(response.status(), 503);
    assert_eq!(gateway.node.invoice_calls(), 0);
}

#[tokio::test]
async fn test_node_endpoints_unavailable_after_stop() {
    let gateway = TestGateway::started().await;
    gateway.manager.stop().await;

    let response = gateway.get("/address").await;
    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("stopped"));

    // Status still degrades gracefully.
    let response = gateway.get("/").await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "stopped");
}

#[tokio::test]
async fn test_get_address_is_fresh() {
    let gateway = TestGateway::started().await;

    let first: Value = gateway.get("/address").await.json().await.unwrap();
    let second: Value = gateway.get("/address").await.json().await.unwrap();
    assert_ne!(first["address"], second["address"]);
}

#[tokio::test]
async fn test_balances_total_is_exact() {
    let gateway = TestGateway::started().await;

    gateway.node.set_balances(0, 0);
    let body: BalancesBody = gateway.get("/balances").await.json().await.unwrap();
    assert_eq!(body.total_sats, 0);

    gateway.node.set_balances(1_234, 4_321);
    let body: BalancesBody = gateway.get("/balances").await.json().await.unwrap();
    assert_eq!(body.onchain_sats, 1_234);
    assert_eq!(body.lightning_sats, 4_321);
    assert_eq!(body.total_sats, 5_555);

    // Larger than the total satoshi supply on each side; the sum must
    // still be exact.
    gateway.node.set_balances(u64::MAX, u64::MAX);
    let body: BalancesBody = gateway.get("/balances").await.json().await.unwrap();
    assert_eq!(body.total_sats, 2 * u128::from(u64::MAX));
}

#[tokio::test]
async fn test_events_are_forwarded_and_drained() {
    let gateway = TestGateway::started().await;
    gateway
        .node
        .push_event(NodeEvent::text("Payment received: 1000 msats"));

    let body: Value = gateway.get("/events").await.json().await.unwrap();
    assert_eq!(body["events"], json!(["Payment received: 1000 msats"]));

    let body: Value = gateway.get("/events").await.json().await.unwrap();
    assert_eq!(body["events"], json!([]));
}

#[tokio::test]
async fn test_upstream_errors_map_to_500() {
    let gateway = TestGateway::started().await;
    gateway.node.fail_requests();

    let response = gateway.get("/address").await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("mock backend failure"));

    let response = gateway
        .post_json("/invoice", &json!({"amount_sats": 1000}))
        .await;
    assert_eq!(response.status(), 500);

    let response = gateway.get("/balances").await;
    assert_eq!(response.status(), 500);

    let response = gateway.get("/events").await;
    assert_eq!(response.status(), 500);
}
