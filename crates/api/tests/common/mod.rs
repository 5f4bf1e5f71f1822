#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trivia_api::config::ServerConfig;
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_core::memory::MemoryStore;
use trivia_core::question::NewQuestion;
use trivia_core::store::QuestionStore;

/// Category ids assigned by [`seeded_store`].
pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const GEOGRAPHY: i64 = 3;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as the only CORS origin (the trivia
/// frontend's dev server) and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router, with every middleware layer, over the
/// given in-memory store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState { store };
    build_app_router(state, &test_config())
}

/// A store with three categories and no questions.
pub fn empty_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_categories(&["Science", "Art", "Geography"]))
}

/// A store with three categories and `count` questions, spread round-robin
/// over Science, Art and Geography. Question ids run from 1 to `count`.
pub async fn seeded_store(count: usize) -> Arc<MemoryStore> {
    let store = empty_store();
    let categories = [SCIENCE, ART, GEOGRAPHY];
    for i in 0..count {
        store
            .insert_question(&NewQuestion {
                question: format!("Trivia question number {}?", i + 1),
                answer: format!("Answer {}", i + 1),
                difficulty: (i % 5) as i32 + 1,
                category: categories[i % categories.len()],
            })
            .await
            .unwrap();
    }
    store
}

/// Send a request with an optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
