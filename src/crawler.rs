use std::sync::Arc;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::time::Duration;

use crate::config::CrawlConfig;
use crate::error::Result;
use crate::extract::{listing_request, listings_from_status};
use crate::firecrawl::{FirecrawlClient, JobPoller};
use crate::models::BusinessListing;

pub struct Crawler {
    client: Arc<FirecrawlClient>,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(client: FirecrawlClient, mut config: CrawlConfig) -> Self {
        // A zero permit semaphore would never let a crawl start.
        config.concurrency_limit = config.concurrency_limit.max(1);
        Self {
            client: Arc::new(client),
            config,
        }
    }

    /// Crawls each listing URL and collects the extracted records.
    ///
    /// A failed URL is logged and skipped rather than aborting the run.
    pub async fn crawl_listings(&self, urls: &[String]) -> Result<Vec<BusinessListing>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));

        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} urls")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut crawl_futures = Vec::new();

        for url in urls {
            let client = self.client.clone();
            let sem = semaphore.clone();
            let url = url.clone();
            let max_attempts = self.config.max_poll_attempts;
            let interval = Duration::from_secs(self.config.poll_interval_secs);
            let pb_clone = pb.clone();

            crawl_futures.push(async move {
                let _permit = sem.acquire().await.ok()?;

                let result = crawl_one(&client, &url, max_attempts, interval).await;
                pb_clone.inc(1);

                match result {
                    Ok(listings) => Some(listings),
                    Err(e) => {
                        tracing::warn!("Crawl failed for {}: {}", url, e);
                        None
                    }
                }
            });
        }

        let results = join_all(crawl_futures).await;
        pb.finish_with_message("Crawl complete");

        Ok(results.into_iter().flatten().flatten().collect())
    }
}

async fn crawl_one(
    client: &FirecrawlClient,
    url: &str,
    max_attempts: u32,
    interval: Duration,
) -> Result<Vec<BusinessListing>> {
    let request = listing_request(url);
    let job_id = client.submit_crawl(&request).await?;

    let poller = JobPoller::new(client, max_attempts, interval);
    let status = poller.wait_for_completion(&job_id).await?;

    listings_from_status(url, &status)
}
