//! Scope predicate for inbound push events.
//!
//! A push is in scope when its repository is on the allow-list AND the branch
//! name derived from its ref starts with the configured prefix. Both checks
//! are exact and case-sensitive; a malformed ref yields an empty branch name
//! and fails the prefix check rather than raising.

use crate::webhooks::PushEvent;

use super::EventRules;

/// Derives the branch name from a full ref path.
///
/// Drops the first two slash-delimited segments and rejoins the remainder, so
/// `refs/heads/featurethon-nov` becomes `featurethon-nov` and
/// `refs/heads/featurethon/ui` becomes `featurethon/ui`. A ref with fewer
/// than two separators yields the empty string.
pub fn branch_name(git_ref: &str) -> String {
    let segments: Vec<&str> = git_ref.split('/').collect();
    if segments.len() <= 2 {
        return String::new();
    }
    segments[2..].join("/")
}

/// Returns true if the push event should be processed.
///
/// Pure function of its inputs; no side effects.
pub fn is_in_scope(event: &PushEvent, rules: &EventRules) -> bool {
    rules.allows_repo(&event.repository)
        && branch_name(&event.git_ref).starts_with(rules.branch_prefix())
}
