use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Firecrawl API error: {0}")]
    FirecrawlApi(String),

    #[error("No jobId in crawl submission response")]
    MissingJobId,

    #[error("Crawl job {0} failed")]
    JobFailed(String),

    #[error("Crawl job {job_id} timed out after {attempts} attempts")]
    JobTimeout { job_id: String, attempts: u32 },

    #[error("Crawl job returned no pages for {0}")]
    EmptyResult(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
