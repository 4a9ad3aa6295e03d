//! Announcement rendering: per-author statistics in, display strings out.
//!
//! Each contributor gets one line built from a random decorative title, their
//! name and team, a random celebratory phrase, the commit count, and their own
//! commit messages joined together. The random source is injected so tests can
//! seed it and assert on the non-random parts.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::aggregate::ContributorStats;

/// Built-in decorative titles prefixed to contributor names.
const TITLES: &[&str] = &[
    "Code Wizard",
    "Commit Machine",
    "Branch Whisperer",
    "Merge Maestro",
    "Keyboard Crusher",
    "Shipping Legend",
];

/// Built-in celebratory phrases.
const PHRASES: &[&str] = &[
    "is on fire!",
    "keeps them coming!",
    "is crushing it!",
    "strikes again!",
    "is unstoppable!",
];

/// Errors that can occur while rendering the digest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A flavor-text list is empty.
    ///
    /// Drawing from an empty list is a configuration defect, never silently
    /// skipped.
    #[error("empty choice list: {list}")]
    EmptyChoiceSet { list: &'static str },
}

/// The flavor-text lists used to decorate announcements.
///
/// Constructed once at startup. Both lists must be non-empty; [`render`]
/// rejects empty lists with [`RenderError::EmptyChoiceSet`].
#[derive(Debug, Clone)]
pub struct Flair {
    pub titles: Vec<String>,
    pub phrases: Vec<String>,
}

impl Flair {
    pub fn new(
        titles: impl IntoIterator<Item = String>,
        phrases: impl IntoIterator<Item = String>,
    ) -> Self {
        Flair {
            titles: titles.into_iter().collect(),
            phrases: phrases.into_iter().collect(),
        }
    }
}

impl Default for Flair {
    fn default() -> Self {
        Flair::new(
            TITLES.iter().map(|s| s.to_string()),
            PHRASES.iter().map(|s| s.to_string()),
        )
    }
}

/// Renders one announcement line per contributor, in map iteration order.
///
/// Titles and phrases are drawn uniformly at random from `flair`. The line
/// body uses the contributor's own commit messages joined with `"; "` rather
/// than the push's head commit message, so multi-author pushes credit each
/// author with their own work.
///
/// Has no side effects beyond producing strings; the digest is not mutated.
pub fn render<R: Rng + ?Sized>(
    digest: &BTreeMap<String, ContributorStats>,
    flair: &Flair,
    rng: &mut R,
) -> Result<Vec<String>, RenderError> {
    // Checked up front so an empty digest still surfaces broken configuration.
    if flair.titles.is_empty() {
        return Err(RenderError::EmptyChoiceSet { list: "titles" });
    }
    if flair.phrases.is_empty() {
        return Err(RenderError::EmptyChoiceSet { list: "phrases" });
    }

    let mut lines = Vec::with_capacity(digest.len());

    for (author, stats) in digest {
        let title = flair
            .titles
            .choose(rng)
            .ok_or(RenderError::EmptyChoiceSet { list: "titles" })?;
        let phrase = flair
            .phrases
            .choose(rng)
            .ok_or(RenderError::EmptyChoiceSet { list: "phrases" })?;

        let noun = if stats.commit_count == 1 {
            "commit"
        } else {
            "commits"
        };

        lines.push(format!(
            "🎉 {title} {author} ({team}) {phrase} {count} {noun} pushed: {work}",
            team = stats.team,
            count = stats.commit_count,
            work = stats.messages.join("; "),
        ));
    }

    Ok(lines)
}
