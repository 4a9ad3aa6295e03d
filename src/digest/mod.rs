//! Per-contributor digest of one push event.
//!
//! This is the core pipeline behind the announcement: fold an in-scope push's
//! commit list into per-author statistics ([`aggregate`]), then render one
//! celebratory line per contributor ([`render`]). Both steps are pure; the
//! only non-determinism is the injected random source used for flavor text.
//!
//! The digest lives only for the duration of one request. Nothing is merged
//! across events.

pub mod aggregate;
pub mod render;

pub use aggregate::{ContributorStats, DigestError, aggregate};
pub use render::{Flair, RenderError, render};
