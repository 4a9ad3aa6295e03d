//! Process configuration loaded from the environment.
//!
//! Read once at startup and passed explicitly to the components that need it.

use thiserror::Error;

/// Environment variable naming the listen port.
const ENV_PORT: &str = "SERVER_PORT";

/// Environment variable naming the outbound messaging webhook URL.
const ENV_MESSAGING_URL: &str = "SLACK_WEBHOOK_URL";

/// Default listen port when `SERVER_PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Errors that can occur loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable has an unparseable value.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Startup configuration for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,

    /// Webhook URL announcements are posted to.
    pub messaging_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Reads `SERVER_PORT` (default 3000) and `SLACK_WEBHOOK_URL` (required).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var(ENV_PORT) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let messaging_url =
            std::env::var(ENV_MESSAGING_URL).map_err(|_| ConfigError::MissingVar(ENV_MESSAGING_URL))?;

        Ok(Config {
            port,
            messaging_url,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: ENV_PORT,
        value: raw.to_string(),
    })
}
