use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub max_poll_attempts: u32,
    pub poll_interval_secs: u64,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("FIREFLOW_API_KEY")
            .map_err(|_| Error::Config("FIREFLOW_API_KEY environment variable not set".to_string()))?;

        let base_url = env::var("FIRECRAWL_BASE_URL")
            .unwrap_or_else(|_| "https://api.firecrawl.dev".to_string());

        let max_poll_attempts = env::var("MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Ok(Self {
            api_key,
            base_url,
            max_poll_attempts,
            poll_interval_secs,
            concurrency_limit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub max_poll_attempts: u32,
    pub poll_interval_secs: u64,
    pub concurrency_limit: usize,
}

impl From<&Config> for CrawlConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_poll_attempts: config.max_poll_attempts,
            poll_interval_secs: config.poll_interval_secs,
            concurrency_limit: config.concurrency_limit,
        }
    }
}
