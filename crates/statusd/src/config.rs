//! Configuration for statusd.
//!
//! Everything comes from environment variables, read once at startup and
//! treated as immutable for the process lifetime. Only the application id
//! is required; the rest has sensible defaults.

use anyhow::{Context, Result};
use std::time::Duration;

/// Required: the application id inbound events must carry.
pub const ENV_APPLICATION_ID: &str = "SKILL_APPLICATION_ID";

/// Optional: overrides the status page summary feed URL.
pub const ENV_STATUS_PAGE_URL: &str = "STATUS_PAGE_URL";

/// Optional: feed credential, sent as `Authorization: OAuth <key>`.
pub const ENV_STATUS_PAGE_API_KEY: &str = "STATUS_PAGE_API_KEY";

/// Optional: overrides the webhook listen address.
pub const ENV_BIND_ADDR: &str = "STATUSD_BIND_ADDR";

pub const DEFAULT_STATUS_PAGE_URL: &str = "https://status.meridian.com/api/v2/summary.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8484";

/// Upper bound on one feed fetch. The voice platform enforces its own
/// deadline on the whole webhook call; a slow feed must not eat it.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(2);

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application id inbound events must match.
    pub application_id: String,
    /// Status page summary feed endpoint.
    pub status_page_url: String,
    /// Optional feed credential.
    pub status_page_api_key: Option<String>,
    /// Webhook listen address.
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the process environment. Fails when the
    /// application id is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an injectable lookup so tests can supply
    /// their own environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let application_id = lookup(ENV_APPLICATION_ID)
            .filter(|value| !value.is_empty())
            .with_context(|| format!("{} must be set", ENV_APPLICATION_ID))?;

        Ok(Self {
            application_id,
            status_page_url: lookup(ENV_STATUS_PAGE_URL)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS_PAGE_URL.to_string()),
            status_page_api_key: lookup(ENV_STATUS_PAGE_API_KEY)
                .filter(|value| !value.is_empty()),
            bind_addr: lookup(ENV_BIND_ADDR)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let env = env_of(&[(ENV_APPLICATION_ID, "amzn1.ask.skill.test")]);
        let config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.application_id, "amzn1.ask.skill.test");
        assert_eq!(config.status_page_url, DEFAULT_STATUS_PAGE_URL);
        assert_eq!(config.status_page_api_key, None);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_overrides_are_respected() {
        let env = env_of(&[
            (ENV_APPLICATION_ID, "amzn1.ask.skill.test"),
            (ENV_STATUS_PAGE_URL, "https://example.com/summary.json"),
            (ENV_STATUS_PAGE_API_KEY, "secret"),
            (ENV_BIND_ADDR, "0.0.0.0:9000"),
        ]);
        let config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.status_page_url, "https://example.com/summary.json");
        assert_eq!(config.status_page_api_key.as_deref(), Some("secret"));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_missing_application_id_fails() {
        let env = env_of(&[(ENV_STATUS_PAGE_URL, "https://example.com/summary.json")]);
        let err = Config::from_lookup(|name| env.get(name).cloned()).unwrap_err();

        assert!(err.to_string().contains(ENV_APPLICATION_ID));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let env = env_of(&[
            (ENV_APPLICATION_ID, "amzn1.ask.skill.test"),
            (ENV_STATUS_PAGE_URL, ""),
            (ENV_STATUS_PAGE_API_KEY, ""),
        ]);
        let config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.status_page_url, DEFAULT_STATUS_PAGE_URL);
        assert_eq!(config.status_page_api_key, None);

        let env = env_of(&[(ENV_APPLICATION_ID, "")]);
        assert!(Config::from_lookup(|name| env.get(name).cloned()).is_err());
    }
}
