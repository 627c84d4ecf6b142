//! Common test utilities for integration tests
//!
//! The application is exercised end to end through `tower::ServiceExt`,
//! backed by the in-memory store so no database is needed. Store-specific
//! coverage against PostgreSQL lives in its own ignored suite.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use exercise_tracker_backend::{routes, state::AppState, store::MemoryUserStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory store
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(MemoryUserStore::new()));
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Create a user and return their id
    pub async fn create_user(&self, username: &str) -> String {
        let (status, body) = self
            .post("/api/users", &format!(r#"{{"username":"{username}"}}"#))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create_user failed: {body}");

        json(&body)["id"].as_str().unwrap().to_string()
    }
}

/// Parse a response body as JSON
pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON body {body:?}: {e}"))
}
