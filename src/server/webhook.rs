//! Webhook endpoint handler.
//!
//! Accepts GitHub webhook deliveries and runs the announcement pipeline for
//! in-scope pushes: parse, filter, aggregate, render, deliver. Everything else
//! is acknowledged and ignored so GitHub does not retry.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AppState;
use crate::digest::{DigestError, RenderError, aggregate, render};
use crate::rules::is_in_scope;
use crate::webhooks::{ParseError, parse_webhook};

/// Header name for GitHub event type.
const HEADER_EVENT: &str = "x-github-event";

/// Errors that can occur when processing a webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Missing required header.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// Malformed payload or missing required fields.
    #[error("invalid payload: {0}")]
    Parse(#[from] ParseError),

    /// Aggregation failure: the team table does not cover the repository.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// Rendering failure: a flavor-text list is empty.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebhookError::MissingHeader(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            WebhookError::Parse(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Both of these mean our own configuration is broken, not that
            // the request was bad.
            WebhookError::Digest(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            WebhookError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, message).into_response()
    }
}

/// Webhook handler.
///
/// # Request
///
/// - Method: POST
/// - Required headers:
///   - `X-GitHub-Event`: Event type (e.g., "push", "ping")
/// - Body: JSON webhook payload
///
/// # Response
///
/// - 202 Accepted: In-scope push, announcement attempted
/// - 200 OK: Event acknowledged but ignored (non-push, out of scope, or
///   nothing to announce)
/// - 400 Bad Request: Missing header or invalid JSON
/// - 500 Internal Server Error: Configuration defect (team table gap or
///   empty flavor-text list)
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), WebhookError> {
    let event_type = get_header(&headers, HEADER_EVENT)?;

    debug!(event_type = %event_type, bytes = body.len(), "received webhook");

    let Some(event) = parse_webhook(&event_type, &body)? else {
        debug!(event_type = %event_type, "ignoring non-push event");
        return Ok((StatusCode::OK, "ignored"));
    };

    if !is_in_scope(&event, app_state.rules()) {
        debug!(
            repo = %event.repository,
            git_ref = %event.git_ref,
            "push out of scope"
        );
        return Ok((StatusCode::OK, "ignored"));
    }

    let stats = aggregate(&event, app_state.rules())?;
    let lines = render(&stats, app_state.flair(), &mut rand::thread_rng())?;

    if lines.is_empty() {
        // An in-scope push with no commits (e.g., a branch creation) has
        // nothing to announce.
        debug!(repo = %event.repository, "in-scope push with no commits");
        return Ok((StatusCode::OK, "ignored"));
    }

    info!(
        repo = %event.repository,
        contributors = stats.len(),
        commits = event.commits.len(),
        "announcing in-scope push"
    );

    // Delivery is best-effort: a down messaging endpoint must not make
    // GitHub retry the webhook.
    if let Err(e) = app_state.notifier().announce(&lines.join("\n")).await {
        warn!(error = %e, "failed to deliver announcement");
    }

    Ok((StatusCode::ACCEPTED, "Accepted"))
}

/// Extracts a required header value as a string.
fn get_header(headers: &HeaderMap, name: &'static str) -> Result<String, WebhookError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .ok_or(WebhookError::MissingHeader(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_header_present() {
        let mut headers = HeaderMap::new();
        headers.insert("x-github-event", "push".parse().unwrap());

        let result = get_header(&headers, "x-github-event").unwrap();
        assert_eq!(result, "push");
    }

    #[test]
    fn get_header_missing() {
        let headers = HeaderMap::new();

        let result = get_header(&headers, "x-github-event");
        assert!(matches!(result, Err(WebhookError::MissingHeader(_))));
    }

    #[test]
    fn missing_header_maps_to_400() {
        let response = WebhookError::MissingHeader("x-github-event").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_defects_map_to_500() {
        let digest_err = WebhookError::Digest(DigestError::UnknownRepository(
            crate::types::RepoName::new("side-project"),
        ));
        assert_eq!(
            digest_err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let render_err = WebhookError::Render(RenderError::EmptyChoiceSet { list: "titles" });
        assert_eq!(
            render_err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
