//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of different name types (e.g., using a
//! repository name where a team name is expected) and make the code more
//! self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository name as it appears in a push payload (e.g., `"prisere"`).
///
/// This is the bare repository name, not the `owner/repo` form. Matching
/// against the allow-list is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoName(pub String);

impl RepoName {
    pub fn new(s: impl Into<String>) -> Self {
        RepoName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        RepoName(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        RepoName(s.to_string())
    }
}

/// A team name from the repository→team table (e.g., `"Chiefs"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(pub String);

impl TeamName {
    pub fn new(s: impl Into<String>) -> Self {
        TeamName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TeamName {
    fn from(s: String) -> Self {
        TeamName(s)
    }
}

impl From<&str> for TeamName {
    fn from(s: &str) -> Self {
        TeamName(s.to_string())
    }
}
