use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::components::pagination::DEFAULT_ITEMS_PER_PAGE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_READ_RETRIES: u32 = 1;
pub const DEFAULT_STATE_FILE: &str = ".leave-portal/state.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub read_retries: u32,
    pub state_file: PathBuf,
    pub page_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_retries: DEFAULT_READ_RETRIES,
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            page_size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl RuntimeConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("LEAVE_PORTAL_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err(anyhow!("LEAVE_PORTAL_API_BASE_URL must not be empty"));
        }

        let timeout_secs = lookup("LEAVE_PORTAL_TIMEOUT_SECS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let read_retries = lookup("LEAVE_PORTAL_READ_RETRIES")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_READ_RETRIES);

        let state_file = lookup("LEAVE_PORTAL_STATE_FILE")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

        let page_size = lookup("LEAVE_PORTAL_PAGE_SIZE")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);

        Ok(RuntimeConfig {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            read_retries,
            state_file,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn overrides_are_read_and_trailing_slash_is_trimmed() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("LEAVE_PORTAL_API_BASE_URL", "https://portal.example.edu/api/"),
            ("LEAVE_PORTAL_TIMEOUT_SECS", "5"),
            ("LEAVE_PORTAL_READ_RETRIES", "0"),
            ("LEAVE_PORTAL_STATE_FILE", "/tmp/portal.json"),
            ("LEAVE_PORTAL_PAGE_SIZE", "20"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://portal.example.edu/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.read_retries, 0);
        assert_eq!(config.state_file, PathBuf::from("/tmp/portal.json"));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("LEAVE_PORTAL_TIMEOUT_SECS", "soon"),
            ("LEAVE_PORTAL_PAGE_SIZE", "0"),
        ]))
        .unwrap();
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(config.page_size, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = RuntimeConfig::from_lookup(lookup_from(&[("LEAVE_PORTAL_API_BASE_URL", "  ")]));
        assert!(result.is_err());
    }
}
