#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use dairy_dashboard::{
    config::AppConfig, dto::auth::SessionClaims, models::Role, routes::create_app, state::AppState,
};

pub const SECRET: &str = "test-secret";

/// Serve a router on a loopback listener and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[derive(Clone)]
struct Stub {
    orders: Value,
    hits: Arc<AtomicUsize>,
}

async fn stub_list(State(stub): State<Stub>) -> Json<Value> {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    Json(stub.orders.clone())
}

async fn stub_create(
    State(stub): State<Stub>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    body["id"] = json!(101);
    body["orderId"] = json!("ORD-101");
    (StatusCode::OK, Json(body))
}

/// In-memory stand-in for the external backend. Serves `orders` on GET and
/// echoes creations with an id assigned; counts hits so tests can assert
/// that unauthorized requests never reach it.
pub async fn spawn_backend(orders: Value) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let stub = Stub {
        orders,
        hits: hits.clone(),
    };
    let router = Router::new()
        .route("/api/orders", get(stub_list).post(stub_create))
        .with_state(stub);
    (spawn(router).await, hits)
}

/// Backend stand-in that fails every orders request with a fixed status and
/// text body.
pub async fn spawn_failing_backend(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route(
        "/api/orders",
        get(move || async move { (status, body) }).post(move || async move { (status, body) }),
    );
    spawn(router).await
}

pub fn test_config(backend_base_url: String) -> AppConfig {
    AppConfig {
        backend_base_url,
        session_secret: SECRET.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Serve the application wired to the given backend and return its base URL.
pub async fn spawn_app(backend_base_url: String) -> String {
    let state = AppState::new(test_config(backend_base_url));
    spawn(create_app(state)).await
}

/// Sign a session token against the test secret. Negative `ttl` mints an
/// already-expired token.
pub fn mint_token(role: Role, shop_id: Option<i64>, ttl: Duration) -> String {
    let claims = SessionClaims {
        sub: "tester".to_string(),
        role,
        exp: (Utc::now() + ttl).timestamp(),
        shop_id,
        access_token: Some("backend-token".to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode token")
}
