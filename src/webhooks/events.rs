//! GitHub webhook event types.
//!
//! This module defines the typed representation of the one webhook event the
//! featurethon bot handles: the `push` event, with the fields we need for
//! scope filtering and per-contributor aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::RepoName;

/// A parsed `push` webhook event.
///
/// This carries only the fields the bot reads. The raw payload contains far
/// more (pusher, compare URL, timestamps); the parser discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    /// The repository the push targeted.
    pub repository: RepoName,

    /// The full ref path, e.g. `refs/heads/featurethon-nov`.
    ///
    /// The branch name is every slash-delimited segment after the first two.
    pub git_ref: String,

    /// The message of the head commit of the push.
    ///
    /// Empty when the payload's `head_commit` is null (e.g., a branch
    /// deletion).
    pub head_commit_message: String,

    /// The commits in this push, in delivery order.
    pub commits: Vec<CommitRecord>,
}

/// A single commit within a push event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit author's name.
    pub author: String,

    /// The commit message.
    pub message: String,

    /// Paths added by this commit.
    pub added: BTreeSet<String>,

    /// Paths removed by this commit.
    pub removed: BTreeSet<String>,

    /// Paths modified by this commit.
    pub modified: BTreeSet<String>,
}

impl CommitRecord {
    /// Creates a commit record with empty file sets.
    ///
    /// Mostly useful in tests; the parser builds records directly from the
    /// payload.
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        CommitRecord {
            author: author.into(),
            message: message.into(),
            added: BTreeSet::new(),
            removed: BTreeSet::new(),
            modified: BTreeSet::new(),
        }
    }
}
