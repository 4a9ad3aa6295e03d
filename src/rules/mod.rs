//! Event scoping rules: which repositories and branches count.
//!
//! The allow-list, target branch prefix, and repository→team table are loaded
//! once at startup into an [`EventRules`] value and passed explicitly to the
//! filter and aggregator, so tests can run with alternate tables.

use std::collections::{BTreeSet, HashMap};

use crate::types::{RepoName, TeamName};

pub mod scope;

pub use scope::{branch_name, is_in_scope};

/// Repositories participating in the fall 2025 featurethon.
const FALL_2025_REPOS: &[&str] = &[
    "prisere",
    "shiperate",
    "cinecircle",
    "specialstandard",
    "karp-backend",
    "karp-frontend-react",
    "karp-frontend-react-native",
];

/// Branch prefix that marks a push as featurethon work.
const FALL_2025_BRANCH_PREFIX: &str = "featurethon";

/// Repository→team table for the fall 2025 featurethon.
///
/// Invariant: covers every entry in [`FALL_2025_REPOS`] (checked by a test).
const FALL_2025_TEAMS: &[(&str, &str)] = &[
    ("prisere", "Prisere"),
    ("shiperate", "Chiefs"),
    ("cinecircle", "CineCircle"),
    ("specialstandard", "SpecialStandard"),
    ("karp-backend", "Karp"),
    ("karp-frontend-react", "Karp"),
    ("karp-frontend-react-native", "Karp"),
];

/// The scoping configuration for one contribution event.
///
/// Immutable after construction. All matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct EventRules {
    /// Repositories whose pushes are in scope.
    allowed_repos: BTreeSet<RepoName>,

    /// Required prefix of the derived branch name.
    branch_prefix: String,

    /// Maps each allowed repository to the team it belongs to.
    teams: HashMap<RepoName, TeamName>,
}

impl EventRules {
    /// Creates rules from explicit tables.
    pub fn new(
        allowed_repos: impl IntoIterator<Item = RepoName>,
        branch_prefix: impl Into<String>,
        teams: impl IntoIterator<Item = (RepoName, TeamName)>,
    ) -> Self {
        EventRules {
            allowed_repos: allowed_repos.into_iter().collect(),
            branch_prefix: branch_prefix.into(),
            teams: teams.into_iter().collect(),
        }
    }

    /// Creates the rules for the fall 2025 featurethon.
    pub fn fall_2025() -> Self {
        EventRules::new(
            FALL_2025_REPOS.iter().map(|r| RepoName::new(*r)),
            FALL_2025_BRANCH_PREFIX,
            FALL_2025_TEAMS
                .iter()
                .map(|(repo, team)| (RepoName::new(*repo), TeamName::new(*team))),
        )
    }

    /// Returns true if the repository is on the allow-list.
    pub fn allows_repo(&self, repo: &RepoName) -> bool {
        self.allowed_repos.contains(repo)
    }

    /// Returns the team the repository belongs to, if known.
    pub fn team_for(&self, repo: &RepoName) -> Option<&TeamName> {
        self.teams.get(repo)
    }

    /// Returns the required branch-name prefix.
    pub fn branch_prefix(&self) -> &str {
        &self.branch_prefix
    }
}
