//! # Config - Environment-driven settings
//!
//! Every setting is read from an environment variable and falls back to a
//! default when the variable is unset.
//!
//! ```text
//! AIRQ_DB_PATH   table file path       (default: "data/global-air-pollution-dataset.csv")
//! AIRQ_USERNAME  shell login name      (default: "username")
//! AIRQ_PASSWORD  shell login password  (default: "password")
//! AIRQ_LOG       tracing filter        (default: "warn")
//! ```
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "AIRQ_DB_PATH";
pub const USERNAME_VAR: &str = "AIRQ_USERNAME";
pub const PASSWORD_VAR: &str = "AIRQ_PASSWORD";
pub const LOG_VAR: &str = "AIRQ_LOG";

pub const DEFAULT_DB_PATH: &str = "data/global-air-pollution-dataset.csv";
pub const DEFAULT_USERNAME: &str = "username";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub username: String,
    pub password: String,
    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            db_path: PathBuf::from(env_or(DB_PATH_VAR, DEFAULT_DB_PATH)),
            username: env_or(USERNAME_VAR, DEFAULT_USERNAME),
            password: env_or(PASSWORD_VAR, DEFAULT_PASSWORD),
            log_filter: env_or(LOG_VAR, DEFAULT_LOG_FILTER),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &self.db_path)
            .field("username", &self.username)
            .field("password", &"***")
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[cfg(test)]
mod tests;
