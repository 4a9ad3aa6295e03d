//! Featurethon Bot - a GitHub webhook receiver that announces featurethon pushes.
//!
//! This library provides the scope filter, per-contributor commit aggregation,
//! and announcement rendering behind the bot, plus the HTTP plumbing around them.

pub mod config;
pub mod digest;
pub mod notify;
pub mod rules;
pub mod server;
pub mod types;
pub mod webhooks;
