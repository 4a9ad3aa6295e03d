//! Commit aggregation: one push event in, per-author statistics out.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::rules::EventRules;
use crate::types::{RepoName, TeamName};
use crate::webhooks::PushEvent;

/// Errors that can occur while aggregating a push event.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The event's repository has no entry in the repository→team table.
    ///
    /// The table must cover every allow-listed repository, so hitting this
    /// for a filtered event means the configuration is inconsistent. The
    /// whole event is aborted; no partial digest is produced.
    #[error("no team registered for repository {0}")]
    UnknownRepository(RepoName),
}

/// Accumulated statistics for one author within a single push event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorStats {
    /// One entry per commit by this author, in push order.
    pub messages: Vec<String>,

    /// Union of paths added across this author's commits.
    pub added: BTreeSet<String>,

    /// Union of paths removed across this author's commits.
    pub removed: BTreeSet<String>,

    /// Union of paths modified across this author's commits.
    pub modified: BTreeSet<String>,

    /// Number of commits by this author in this push. Always at least 1.
    pub commit_count: usize,

    /// The team the event's repository belongs to.
    ///
    /// Identical across every aggregate produced from one event.
    pub team: TeamName,
}

/// Folds the event's commit list into a map keyed by author name.
///
/// Callers must gate on [`crate::rules::is_in_scope`] first; the behavior for
/// out-of-scope events is unspecified (the repository may not resolve to a
/// team).
///
/// Every commit counts toward its author's `commit_count`, including commits
/// with empty file lists. Nothing is deduplicated except the file-path sets,
/// which are true set unions.
pub fn aggregate(
    event: &PushEvent,
    rules: &EventRules,
) -> Result<BTreeMap<String, ContributorStats>, DigestError> {
    // Resolved once per event: the team is a function of the repository, not
    // of any individual commit.
    let team = rules
        .team_for(&event.repository)
        .ok_or_else(|| DigestError::UnknownRepository(event.repository.clone()))?;

    let mut digest: BTreeMap<String, ContributorStats> = BTreeMap::new();

    for commit in &event.commits {
        match digest.entry(commit.author.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(ContributorStats {
                    messages: vec![commit.message.clone()],
                    added: commit.added.clone(),
                    removed: commit.removed.clone(),
                    modified: commit.modified.clone(),
                    commit_count: 1,
                    team: team.clone(),
                });
            }
            Entry::Occupied(mut slot) => {
                let stats = slot.get_mut();
                stats.messages.push(commit.message.clone());
                stats.added.extend(commit.added.iter().cloned());
                stats.removed.extend(commit.removed.iter().cloned());
                stats.modified.extend(commit.modified.iter().cloned());
                stats.commit_count += 1;
            }
        }
    }

    Ok(digest)
}
