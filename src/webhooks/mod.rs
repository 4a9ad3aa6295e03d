//! Webhook handling for GitHub push events.
//!
//! This module provides:
//! - Typed push event structures
//! - Payload parsing from raw JSON

pub mod events;
pub mod parser;

pub use events::{CommitRecord, PushEvent};
pub use parser::{ParseError, parse_webhook};
