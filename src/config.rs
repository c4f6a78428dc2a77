//! Server configuration from environment variables.

use crate::pages::SearchDurations;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SESSION_IDLE_HOURS: u64 = 12;
pub const DEFAULT_CLEANUP_INTERVAL_MINUTES: u64 = 30;
pub const DEFAULT_SEARCH_SECONDS: u64 = 3;
pub const DEFAULT_QUICK_MATCH_SECONDS: u64 = 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Workspaces untouched for this long are dropped.
    pub session_idle: Duration,
    pub cleanup_interval: Duration,
    pub search: SearchDurations,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_MINUTES * 60),
            search: SearchDurations {
                search: Duration::from_secs(DEFAULT_SEARCH_SECONDS),
                quick_match: Duration::from_secs(DEFAULT_QUICK_MATCH_SECONDS),
            },
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT, SESSION_IDLE_HOURS, CLEANUP_INTERVAL_MINUTES, SEARCH_SECONDS and
    /// QUICK_MATCH_SECONDS from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            session_idle: number("SESSION_IDLE_HOURS")
                .and_then(|h| h.checked_mul(3600))
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_idle),
            cleanup_interval: number("CLEANUP_INTERVAL_MINUTES")
                .filter(|m| *m > 0)
                .and_then(|m| m.checked_mul(60))
                .map(Duration::from_secs)
                .unwrap_or(defaults.cleanup_interval),
            search: SearchDurations {
                search: number("SEARCH_SECONDS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.search.search),
                quick_match: number("QUICK_MATCH_SECONDS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.search.quick_match),
            },
        }
    }
}
