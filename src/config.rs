use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://bkapp-mp8l.onrender.com";
pub const DEFAULT_CHAT_POLL_SECS: u64 = 15;
pub const DEFAULT_STATE_PATH: &str = "bkmarket-state.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Overrides the stub session token when set.
    pub token: Option<String>,
    pub chat_poll: Duration,
    /// Total request timeout. Absent means the HTTP client default.
    pub timeout: Option<Duration>,
    pub state_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            chat_poll: Duration::from_secs(DEFAULT_CHAT_POLL_SECS),
            timeout: None,
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("BKMARKET_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = env::var("BKMARKET_TOKEN").ok().filter(|t| !t.is_empty());
        let chat_poll = Duration::from_secs(parse_secs("BKMARKET_CHAT_POLL_SECS")?
            .unwrap_or(DEFAULT_CHAT_POLL_SECS));
        let timeout = parse_secs("BKMARKET_TIMEOUT_SECS")?.map(Duration::from_secs);
        let state_path = env::var("BKMARKET_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH));

        Ok(Self { base_url, token, chat_poll, timeout, state_path })
    }
}

fn parse_secs(var: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://bkapp-mp8l.onrender.com");
        assert_eq!(config.chat_poll, Duration::from_secs(15));
        assert!(config.timeout.is_none());
    }

    // each test seeds its own variable name; tests share the process
    // environment

    #[test]
    fn non_numeric_seconds_are_a_configuration_error() {
        env::set_var("BKMARKET_TEST_BAD_SECS", "soon");
        let err = parse_secs("BKMARKET_TEST_BAD_SECS").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber { var: "BKMARKET_TEST_BAD_SECS", .. }
        ));
        assert_eq!(
            err.to_string(),
            "BKMARKET_TEST_BAD_SECS must be a valid number, got \"soon\""
        );
        env::remove_var("BKMARKET_TEST_BAD_SECS");
    }

    #[test]
    fn numeric_seconds_parse_and_absent_means_none() {
        env::set_var("BKMARKET_TEST_GOOD_SECS", "30");
        assert_eq!(parse_secs("BKMARKET_TEST_GOOD_SECS").unwrap(), Some(30));
        env::remove_var("BKMARKET_TEST_GOOD_SECS");

        assert_eq!(parse_secs("BKMARKET_TEST_UNSET_SECS").unwrap(), None);
    }
}
