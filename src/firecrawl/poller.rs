use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use crate::error::{Error, Result};
use crate::models::{CrawlStatus, JobStatus};

/// Anything that can report the status of a crawl job.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn crawl_status(&self, job_id: &str) -> Result<CrawlStatus>;
}

/// Polls a crawl job until it reaches a terminal status or the attempt
/// budget runs out.
pub struct JobPoller<'a, S: StatusSource + ?Sized> {
    client: &'a S,
    max_attempts: u32,
    interval: Duration,
}

impl<'a, S: StatusSource + ?Sized> JobPoller<'a, S> {
    pub fn new(client: &'a S, max_attempts: u32, interval: Duration) -> Self {
        Self {
            client,
            max_attempts,
            interval,
        }
    }

    pub async fn wait_for_completion(&self, job_id: &str) -> Result<CrawlStatus> {
        for attempt in 1..=self.max_attempts {
            let status = self.client.crawl_status(job_id).await?;

            match status.status {
                JobStatus::Completed => {
                    tracing::info!("Job {} completed", job_id);
                    return Ok(status);
                }
                JobStatus::Failed => {
                    tracing::error!("Job {} failed", job_id);
                    return Err(Error::JobFailed(job_id.to_string()));
                }
                other => {
                    tracing::info!(
                        "Job {} status: {} ({}/{}), waiting {:?}",
                        job_id,
                        other,
                        status.current.unwrap_or(0),
                        status.total.unwrap_or(0),
                        self.interval
                    );
                    if attempt < self.max_attempts {
                        sleep(self.interval).await;
                    }
                }
            }
        }

        Err(Error::JobTimeout {
            job_id: job_id.to_string(),
            attempts: self.max_attempts,
        })
    }
}
