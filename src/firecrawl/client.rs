use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::firecrawl::poller::StatusSource;
use crate::models::{CrawlStatus, CrawlSubmission};

/// Body for `POST /v0/crawl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequest {
    pub url: String,
    pub crawler_options: CrawlerOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerOptions {
    pub mode: String,
    pub extraction_prompt: String,
    pub extraction_schema: serde_json::Value,
}

pub struct FirecrawlClient {
    client: Client,
    base_url: String,
}

impl FirecrawlClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, "https://api.firecrawl.dev")
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("bizcrawl/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits a crawl job and returns its id.
    pub async fn submit_crawl(&self, request: &CrawlRequest) -> Result<String> {
        let url = format!("{}/v0/crawl", self.base_url);
        tracing::info!("Submitting crawl job for: {}", request.url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::FirecrawlApi(format!(
                "Failed to submit crawl for {}: {} - {}",
                request.url, status, body
            )));
        }

        let submission: CrawlSubmission = response.json().await?;
        let job_id = submission.job_id.ok_or(Error::MissingJobId)?;
        tracing::info!("Crawl job submitted, id: {}", job_id);
        Ok(job_id)
    }

    /// Fetches the current status of a crawl job.
    pub async fn crawl_status(&self, job_id: &str) -> Result<CrawlStatus> {
        let url = format!("{}/v0/crawl/status/{}", self.base_url, job_id);
        tracing::debug!("Checking status of job: {}", job_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::FirecrawlApi(format!(
                "Failed to fetch status for job {}: {} - {}",
                job_id, status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StatusSource for FirecrawlClient {
    async fn crawl_status(&self, job_id: &str) -> Result<CrawlStatus> {
        FirecrawlClient::crawl_status(self, job_id).await
    }
}
