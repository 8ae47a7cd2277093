pub mod client;
pub mod poller;

pub use client::{CrawlRequest, CrawlerOptions, FirecrawlClient};
pub use poller::{JobPoller, StatusSource};
