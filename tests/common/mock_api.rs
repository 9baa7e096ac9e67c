//! Mock console API server for integration tests.
//!
//! Speaks just enough of the real API: `POST /auth/login` issues a token
//! for one known credential pair, `GET /users` demands that token. Every
//! request is captured for assertions.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// The one credential pair the mock accepts.
pub const VALID_EMAIL: &str = "user@example.com";
pub const VALID_PASSWORD: &str = "secret123";
/// Token issued on a successful sign-in.
pub const ISSUED_TOKEN: &str = "tok-mock-1";
/// Signing in with this email yields a 200 with a non-JSON body.
pub const GARBLED_EMAIL: &str = "garbled@example.com";
/// Signing in with this email yields a 503.
pub const OUTAGE_EMAIL: &str = "outage@example.com";

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Value of a header, if present (name compared case-insensitively).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Mock console API server.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start the mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
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

    /// Base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All captured requests, in arrival order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let captured = CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        headers: headers.clone(),
        body: body.clone(),
    };
    state.requests.lock().await.push(captured);

    match (method.as_str(), path.as_str()) {
        ("POST", "/auth/login") => handle_login(&body),
        ("GET", "/users") => handle_users(&headers),
        _ => respond(StatusCode::NOT_FOUND, r#"{"error": "no such endpoint"}"#),
    }
}

fn handle_login(body: &[u8]) -> Response<Body> {
    let Ok(credentials) = serde_json::from_slice::<serde_json::Value>(body) else {
        return respond(StatusCode::BAD_REQUEST, r#"{"error": "malformed body"}"#);
    };
    let email = credentials["email"].as_str().unwrap_or("");
    let password = credentials["password"].as_str().unwrap_or("");

    if email == GARBLED_EMAIL {
        return respond(StatusCode::OK, "this is not JSON");
    }
    if email == OUTAGE_EMAIL {
        return respond(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error": "maintenance"}"#,
        );
    }
    if email == VALID_EMAIL && password == VALID_PASSWORD {
        let issued = serde_json::json!({
            "access_token": ISSUED_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        });
        return respond(StatusCode::OK, &issued.to_string());
    }

    respond(StatusCode::UNAUTHORIZED, r#"{"error": "invalid credentials"}"#)
}

fn handle_users(headers: &[(String, String)]) -> Response<Body> {
    let authorized = headers
        .iter()
        .any(|(k, v)| k.eq_ignore_ascii_case("authorization") && v == &format!("Bearer {}", ISSUED_TOKEN));

    if authorized {
        respond(StatusCode::OK, r#"{"users": []}"#)
    } else {
        respond(StatusCode::UNAUTHORIZED, r#"{"error": "missing token"}"#)
    }
}

fn respond(status: StatusCode, body: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build mock response")
}
