//! HTTP server for the featurethon bot.
//!
//! This module implements the HTTP server that:
//! - Accepts webhooks from GitHub and announces in-scope pushes
//! - Provides health checks for liveness probes
//!
//! # Endpoints
//!
//! - `POST /api/webhooks/github` - Accepts GitHub webhook deliveries
//! - `GET /health` - Returns 200 if server is running

use std::sync::Arc;

use tower_http::trace::TraceLayer;

pub mod health;
pub mod webhook;

pub use health::health_handler;
pub use webhook::webhook_handler;

use crate::digest::Flair;
use crate::notify::Notifier;
use crate::rules::EventRules;

/// Shared application state.
///
/// This is passed to all handlers via Axum's `State` extractor. Everything in
/// it is immutable after startup, so concurrent requests share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Scoping rules for inbound pushes.
    rules: EventRules,

    /// Flavor-text lists for announcement rendering.
    flair: Flair,

    /// Client for the outbound messaging webhook.
    notifier: Notifier,
}

impl AppState {
    /// Creates a new `AppState` with the given configuration.
    pub fn new(rules: EventRules, flair: Flair, notifier: Notifier) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                rules,
                flair,
                notifier,
            }),
        }
    }

    /// Returns the event scoping rules.
    pub fn rules(&self) -> &EventRules {
        &self.inner.rules
    }

    /// Returns the announcement flavor-text lists.
    pub fn flair(&self) -> &Flair {
        &self.inner.flair
    }

    /// Returns the outbound notifier.
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/api/webhooks/github", post(webhook_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Creates a test app state whose notifier targets a closed port, so
    /// delivery always fails fast without touching the network.
    fn test_app_state() -> AppState {
        AppState::new(
            EventRules::fall_2025(),
            Flair::default(),
            Notifier::new("http://127.0.0.1:1/hook").unwrap(),
        )
    }

    /// Creates a webhook request for the given event type and payload.
    fn create_webhook_request(event_type: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/webhooks/github")
            .header("content-type", "application/json")
            .header("x-github-event", event_type)
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn in_scope_push() -> serde_json::Value {
        serde_json::json!({
            "ref": "refs/heads/featurethon-nov",
            "repository": { "name": "shiperate" },
            "head_commit": { "message": "wire up the queue" },
            "commits": [
                {
                    "message": "add worker",
                    "author": { "name": "Alice" },
                    "added": ["worker.ts"],
                    "removed": [],
                    "modified": []
                },
                {
                    "message": "wire up the queue",
                    "author": { "name": "Bob" },
                    "added": [],
                    "removed": [],
                    "modified": ["queue.ts"]
                }
            ]
        })
    }

    // ─── Health endpoint tests ───

    #[tokio::test]
    async fn health_returns_200() {
        let app = build_router(test_app_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    // ─── Webhook endpoint tests ───

    #[tokio::test]
    async fn in_scope_push_returns_202_even_when_delivery_fails() {
        let app = build_router(test_app_state());

        let request = create_webhook_request("push", &in_scope_push());
        let response = app.oneshot(request).await.unwrap();

        // The notifier target is unreachable; delivery failure is logged,
        // never surfaced to GitHub.
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn non_push_event_returns_200_ignored() {
        let app = build_router(test_app_state());

        let body = serde_json::json!({ "zen": "Keep it logically awesome." });
        let request = create_webhook_request("ping", &body);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ignored");
    }

    #[tokio::test]
    async fn out_of_scope_push_returns_200_ignored() {
        let app = build_router(test_app_state());

        let mut body = in_scope_push();
        body["ref"] = serde_json::json!("refs/heads/main");

        let request = create_webhook_request("push", &body);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_repo_push_returns_200_ignored() {
        let app = build_router(test_app_state());

        let mut body = in_scope_push();
        body["repository"] = serde_json::json!({ "name": "side-project" });

        let request = create_webhook_request("push", &body);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_push_returns_200_ignored() {
        let app = build_router(test_app_state());

        let mut body = in_scope_push();
        body["commits"] = serde_json::json!([]);
        body["head_commit"] = serde_json::Value::Null;

        let request = create_webhook_request("push", &body);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_event_header_returns_400() {
        let app = build_router(test_app_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/webhooks/github")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&in_scope_push()).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let app = build_router(test_app_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/webhooks/github")
            .header("content-type", "application/json")
            .header("x-github-event", "push")
            .body(Body::from("not json at all"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn push_missing_commits_returns_400() {
        let app = build_router(test_app_state());

        let body = serde_json::json!({
            "ref": "refs/heads/featurethon-nov",
            "repository": { "name": "prisere" }
        });

        let request = create_webhook_request("push", &body);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
