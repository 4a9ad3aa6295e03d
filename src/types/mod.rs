//! Core domain types for the featurethon bot.

pub mod ids;

// Re-export commonly used types at the module level
pub use ids::{RepoName, TeamName};
