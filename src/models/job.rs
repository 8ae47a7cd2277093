use serde::{Deserialize, Serialize};

/// Response to a crawl submission (`POST /v0/crawl`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlSubmission {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Paused,
    Pending,
    Queued,
    Waiting,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Active => "active",
            JobStatus::Paused => "paused",
            JobStatus::Pending => "pending",
            JobStatus::Queued => "queued",
            JobStatus::Waiting => "waiting",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Response from `GET /v0/crawl/status/{jobId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlStatus {
    pub status: JobStatus,
    pub current: Option<u32>,
    pub total: Option<u32>,
    pub data: Option<Vec<PageResult>>,
}

/// A single scraped page inside a completed job's `data` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub content: Option<String>,
    pub markdown: Option<String>,
    pub metadata: Option<PageMetadata>,
    pub llm_extraction: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_submission() {
        let body = r#"{"jobId": "abc-123"}"#;
        let submission: CrawlSubmission = serde_json::from_str(body).unwrap();
        assert_eq!(submission.job_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_deserialize_submission_without_job_id() {
        let submission: CrawlSubmission = serde_json::from_str("{}").unwrap();
        assert!(submission.job_id.is_none());
    }

    #[test]
    fn test_deserialize_completed_status() {
        let body = r##"{
            "status": "completed",
            "current": 1,
            "total": 1,
            "data": [{
                "markdown": "# Listing",
                "metadata": {
                    "title": "Distributor for sale",
                    "description": "Established wholesale distributor",
                    "sourceURL": "https://example.com/listing/1"
                },
                "llm_extraction": {
                    "company_description": "Sells bathroom fixtures",
                    "company_industry": "wholesale",
                    "who_they_serve": "contractors"
                }
            }]
        }"##;

        let status: CrawlStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.status, JobStatus::Completed);
        assert!(status.status.is_terminal());

        let pages = status.data.unwrap();
        assert_eq!(pages.len(), 1);
        let metadata = pages[0].metadata.as_ref().unwrap();
        assert_eq!(metadata.source_url.as_deref(), Some("https://example.com/listing/1"));
        assert!(pages[0].llm_extraction.is_some());
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let body = r#"{"status": "scraping", "current": null, "total": null, "data": null}"#;
        let status: CrawlStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.status, JobStatus::Unknown);
        assert!(!status.status.is_terminal());
    }
}
