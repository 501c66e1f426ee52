//! Runtime settings for the client.
//!
//! Every value can come from a command-line flag or from an environment variable,
//! and falls back to the constants in [`crate::config::sync`] and [`crate::config::client`].

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::client::types::DirectionEncoding;
use crate::config::client::{DEFAULT_SERVER_URL, REQUEST_TIMEOUT_MS};
use crate::config::sync::{POLL_INTERVAL_MS, TIMER_TICK_MS};

/// Invalid runtime settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("server url must start with http:// or https://, got '{0}'")]
    InvalidServerUrl(String),
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
}

/// Command-line and environment settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "grid-client", about = "Terminal client for the grid game server")]
pub struct ClientConfig {
    /// Base URL of the world server.
    #[arg(long = "server", env = "GRID_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Delay between two world polls, in milliseconds.
    #[arg(long = "poll-ms", env = "GRID_POLL_MS", default_value_t = POLL_INTERVAL_MS)]
    pub poll_ms: u64,

    /// Period of the local countdown tick, in milliseconds.
    #[arg(long = "tick-ms", env = "GRID_TICK_MS", default_value_t = TIMER_TICK_MS)]
    pub tick_ms: u64,

    /// Request timeout, in milliseconds.
    #[arg(long = "timeout-ms", env = "GRID_TIMEOUT_MS", default_value_t = REQUEST_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Send moves as W/A/S/D instead of U/D/L/R.
    #[arg(long = "direction-keys", env = "GRID_DIRECTION_KEYS")]
    pub direction_keys: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", env = "GRID_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Do not ring the terminal bell on collect.
    #[arg(long = "no-sound")]
    pub no_sound: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            poll_ms: POLL_INTERVAL_MS,
            tick_ms: TIMER_TICK_MS,
            timeout_ms: REQUEST_TIMEOUT_MS,
            direction_keys: false,
            log_file: None,
            no_sound: false,
        }
    }
}

impl ClientConfig {
    /// Check the values that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(self.server_url.clone()));
        }
        for (name, value) in [
            ("poll interval", self.poll_ms),
            ("timer tick", self.tick_ms),
            ("request timeout", self.timeout_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { name });
            }
        }
        Ok(())
    }

    /// Server URL without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> String {
        self.server_url.trim().trim_end_matches('/').to_string()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn timer_tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn direction_encoding(&self) -> DirectionEncoding {
        if self.direction_keys {
            DirectionEncoding::Keys
        } else {
            DirectionEncoding::Letters
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.timer_tick(), Duration::from_secs(1));
        assert_eq!(config.direction_encoding(), DirectionEncoding::Letters);
    }

    #[test]
    fn test_parse_flags() {
        let config = ClientConfig::try_parse_from([
            "grid-client",
            "--server",
            "http://localhost:9000/",
            "--poll-ms",
            "250",
            "--direction-keys",
        ])
        .expect("flags should parse");
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.poll_ms, 250);
        assert_eq!(config.direction_encoding(), DirectionEncoding::Keys);
    }

    #[test]
    fn test_rejects_bad_url() {
        let config = ClientConfig {
            server_url: "localhost:4567".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidServerUrl("localhost:4567".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_poll_interval() {
        let config = ClientConfig { poll_ms: 0, ..ClientConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration { name: "poll interval" }));
    }
}
