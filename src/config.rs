//! Environment-sourced configuration

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::WatcherError;

/// Default delay between poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Runtime configuration, constructed once at startup and immutable afterwards
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub poll_interval: Duration,
}

impl fmt::Debug for Config {
    // tokens stay out of logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Fails closed: the first required variable that is absent or empty
    /// yields a [`WatcherError::MissingConfig`] naming it.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let practicum_token = require(&lookup, "PRACTICUM_TOKEN")?;
        let telegram_token = require(&lookup, "TELEGRAM_TOKEN")?;
        let telegram_chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?;

        let poll_interval = lookup("POLL_INTERVAL_SECONDS")
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval,
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> crate::Result<String> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(WatcherError::MissingConfig { name })
}
