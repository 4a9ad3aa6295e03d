//! GitHub webhook payload parser.
//!
//! This module parses raw webhook JSON payloads into typed [`PushEvent`]
//! values. The parser is designed to be robust against unknown fields and
//! event types.
//!
//! # Parsing Strategy
//!
//! 1. The event type is determined from the `X-GitHub-Event` header
//! 2. `push` payloads are parsed into a [`PushEvent`]
//! 3. Every other event type returns `Ok(None)` (ignored, not error)
//! 4. Malformed payloads return `Err` with details

use serde::Deserialize;
use thiserror::Error;

use crate::types::RepoName;

use super::events::{CommitRecord, PushEvent};

/// Error type for webhook parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parses a webhook payload into a typed push event.
///
/// # Arguments
///
/// * `event_type` - The value of the `X-GitHub-Event` header
/// * `payload` - The raw JSON payload bytes
///
/// # Returns
///
/// * `Ok(Some(event))` - Successfully parsed a push event
/// * `Ok(None)` - Any other event type (ignored, not an error)
/// * `Err(e)` - Malformed payload or missing required fields
///
/// # Examples
///
/// ```
/// use featurethon_bot::webhooks::parse_webhook;
///
/// let payload = br#"{
///     "ref": "refs/heads/featurethon-nov",
///     "repository": { "name": "prisere" },
///     "head_commit": { "message": "add landing page" },
///     "commits": [
///         {
///             "message": "add landing page",
///             "author": { "name": "Alice" },
///             "added": ["index.html"],
///             "removed": [],
///             "modified": []
///         }
///     ]
/// }"#;
///
/// let event = parse_webhook("push", payload).unwrap().unwrap();
/// assert_eq!(event.repository.as_str(), "prisere");
/// assert_eq!(event.commits.len(), 1);
/// assert!(parse_webhook("ping", payload).unwrap().is_none());
/// ```
pub fn parse_webhook(event_type: &str, payload: &[u8]) -> Result<Option<PushEvent>, ParseError> {
    match event_type {
        "push" => parse_push(payload).map(Some),
        // All other event types are ignored (not an error)
        _ => Ok(None),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's push webhook JSON structure. Optional fields default
// so that minor payload shape variations don't fail the whole delivery.
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPushPayload {
    #[serde(rename = "ref")]
    git_ref: String,
    repository: RawRepository,
    /// Null for pushes with no commits (e.g., branch deletions).
    head_commit: Option<RawHeadCommit>,
    commits: Vec<RawCommit>,
}

/// Minimal repository info present in all webhook payloads.
#[derive(Debug, Deserialize)]
struct RawRepository {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawHeadCommit {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    message: String,
    author: RawAuthor,
    #[serde(default)]
    added: Vec<String>,
    #[serde(default)]
    removed: Vec<String>,
    #[serde(default)]
    modified: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: String,
}

fn parse_push(payload: &[u8]) -> Result<PushEvent, ParseError> {
    let raw: RawPushPayload = serde_json::from_slice(payload)?;

    let commits = raw
        .commits
        .into_iter()
        .map(|c| CommitRecord {
            author: c.author.name,
            message: c.message,
            added: c.added.into_iter().collect(),
            removed: c.removed.into_iter().collect(),
            modified: c.modified.into_iter().collect(),
        })
        .collect();

    Ok(PushEvent {
        repository: RepoName::new(raw.repository.name),
        git_ref: raw.git_ref,
        head_commit_message: raw.head_commit.map(|h| h.message).unwrap_or_default(),
        commits,
    })
}
