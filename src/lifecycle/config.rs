//! Runtime settings, read from the environment.

use std::env;

/// Settings for a [`ShopSystem`](super::ShopSystem) and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Request channel capacity of each store actor.
    pub actor_buffer: usize,

    /// `EnvFilter` directive, e.g. `info` or `midtown_pos=debug`.
    pub log_filter: String,

    /// Emit JSON log lines instead of the compact format.
    pub json_logs: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ShopConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `POS_ACTOR_BUFFER`: channel capacity per actor (default: 32, minimum 1)
    /// - `POS_LOG` or `RUST_LOG`: log filter (default: info)
    /// - `POS_JSON_LOGS`: `true`/`1` for JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            actor_buffer: lookup("POS_ACTOR_BUFFER")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.actor_buffer),

            log_filter: lookup("POS_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),

            json_logs: lookup("POS_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }
}
