use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{Value, json};

use folio::config::Config;

/// In-process webhook receiver: records every payload delivered to it and
/// answers with a fixed status.
#[derive(Clone)]
pub struct MockWebhook {
    received: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
}

impl MockWebhook {
    pub fn payloads(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

async fn receive(State(hook): State<MockWebhook>, Json(body): Json<Value>) -> StatusCode {
    hook.received.lock().unwrap().push(body);
    hook.status
}

async fn spawn_webhook(status: StatusCode) -> (String, MockWebhook) {
    let hook = MockWebhook {
        received: Arc::new(Mutex::new(Vec::new())),
        status,
    };

    let router = Router::new()
        .route("/hook", post(receive))
        .with_state(hook.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind webhook listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Webhook receiver failed");
    });

    (format!("http://{addr}/hook"), hook)
}

/// A running test server instance wired to a webhook receiver.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub webhook: MockWebhook,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit an inquiry to the contact route, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn the site against a webhook receiver that accepts deliveries.
/// Chat webhooks answer 204 on success.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_status(StatusCode::NO_CONTENT).await
}

/// Spawn the site against a webhook receiver answering `webhook_status`.
pub async fn spawn_app_with_status(webhook_status: StatusCode) -> TestApp {
    let (webhook_url, webhook) = spawn_webhook(webhook_status).await;
    spawn_with_webhook_url(webhook_url, webhook).await
}

/// Spawn the site pointed at a webhook URL nothing listens on.
pub async fn spawn_app_with_dead_webhook() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let webhook = MockWebhook {
        received: Arc::new(Mutex::new(Vec::new())),
        status: StatusCode::NO_CONTENT,
    };
    spawn_with_webhook_url(format!("http://{addr}/hook"), webhook).await
}

async fn spawn_with_webhook_url(webhook_url: String, webhook: MockWebhook) -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        webhook_url,
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    };

    let app = folio::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        webhook,
    }
}

/// A complete, valid inquiry body.
pub fn inquiry_json() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "company": "Acme Inc",
        "projectType": "website",
        "budget": "under-5k",
        "timeline": "asap",
        "description": "Need a site"
    })
}
