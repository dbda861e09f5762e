//! Mock specialties backend for integration tests.
//!
//! A tiny in-memory CRUD service exposing the same endpoints as the
//! real backend, capturing every request for wire-level assertions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    rows: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<i64>>,
    fail_next: Arc<Mutex<Option<u16>>>,
}

/// In-memory specialties service for testing.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    /// Start a new mock backend server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            rows: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            fail_next: Arc::new(Mutex::new(None)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed the backend table; id assignment continues past the largest id.
    pub async fn seed(&self, rows: Vec<Value>) {
        let max_id = rows
            .iter()
            .filter_map(|row| row.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0);
        *self.state.next_id.lock().await = max_id + 1;
        *self.state.rows.lock().await = rows;
    }

    /// Get the backend table as it stands.
    pub async fn rows(&self) -> Vec<Value> {
        self.state.rows.lock().await.clone()
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Count captured requests matching method and path.
    pub async fn request_count(&self, method: &str, path: &str) -> usize {
        self.state
            .requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Make the next request fail with the given status.
    pub async fn fail_next(&self, status: u16) {
        *self.state.fail_next.lock().await = Some(status);
    }

    /// Clear captured requests.
    pub async fn clear(&self) {
        self.state.requests.lock().await.clear();
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query: HashMap<String, String> = req.uri().query().map(parse_query).unwrap_or_default();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default();
    let body: Option<Value> = serde_json::from_slice(&body_bytes).ok();

    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        body: body.clone(),
    });

    if let Some(status) = state.fail_next.lock().await.take() {
        return problem(status, "Injected failure");
    }

    let item_id = path
        .strip_prefix("/api/specialties/")
        .and_then(|rest| rest.parse::<i64>().ok());

    match (method.as_str(), path.as_str(), item_id) {
        ("GET", "/api/specialties", _) => {
            let rows = state.rows.lock().await.clone();
            json_response(StatusCode::OK, &Value::Array(rows))
        }

        ("GET", "/api/_search/specialties", _) => {
            let needle = query
                .get("query")
                .cloned()
                .unwrap_or_default()
                .to_lowercase();
            let hits: Vec<Value> = state
                .rows
                .lock()
                .await
                .iter()
                .filter(|row| {
                    row.get("name")
                        .and_then(Value::as_str)
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();
            json_response(StatusCode::OK, &Value::Array(hits))
        }

        ("POST", "/api/specialties", _) => {
            let Some(mut row) = body else {
                return problem(400, "Malformed body");
            };
            let mut next_id = state.next_id.lock().await;
            row["id"] = json!(*next_id);
            *next_id += 1;
            state.rows.lock().await.push(row.clone());
            json_response(StatusCode::CREATED, &row)
        }

        ("GET", _, Some(id)) => {
            let rows = state.rows.lock().await;
            match rows.iter().find(|row| row_id(row) == Some(id)) {
                Some(row) => json_response(StatusCode::OK, row),
                None => problem(404, "Specialty not found"),
            }
        }

        ("PUT", _, Some(id)) => {
            let Some(mut replacement) = body else {
                return problem(400, "Malformed body");
            };
            replacement["id"] = json!(id);
            let mut rows = state.rows.lock().await;
            match rows.iter_mut().find(|row| row_id(row) == Some(id)) {
                Some(row) => {
                    *row = replacement.clone();
                    json_response(StatusCode::OK, &replacement)
                }
                None => problem(404, "Specialty not found"),
            }
        }

        ("PATCH", _, Some(id)) => {
            let Some(Value::Object(patch)) = body else {
                return problem(400, "Malformed body");
            };
            let mut rows = state.rows.lock().await;
            match rows.iter_mut().find(|row| row_id(row) == Some(id)) {
                Some(row) => {
                    if let Value::Object(target) = row {
                        for (key, value) in patch {
                            target.insert(key, value);
                        }
                    }
                    json_response(StatusCode::OK, row)
                }
                None => problem(404, "Specialty not found"),
            }
        }

        ("DELETE", _, Some(id)) => {
            let mut rows = state.rows.lock().await;
            let before = rows.len();
            rows.retain(|row| row_id(row) != Some(id));
            if rows.len() == before {
                problem(404, "Specialty not found")
            } else {
                Response::builder()
                    .status(StatusCode::NO_CONTENT)
                    .body(Body::empty())
                    .unwrap()
            }
        }

        _ => problem(404, "No such endpoint"),
    }
}

fn json_response(status: StatusCode, body: &Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// RFC 7807 problem response, as the real backend emits on failure.
fn problem(status: u16, detail: &str) -> Response<Body> {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({
        "title": status.canonical_reason().unwrap_or("Error"),
        "detail": detail,
        "status": status.as_u16(),
    });
    Response::builder()
        .status(status)
        .header("content-type", "application/problem+json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn row_id(row: &Value) -> Option<i64> {
    row.get("id").and_then(Value::as_i64)
}
