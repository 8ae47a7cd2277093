pub mod job;
pub mod listing;

pub use job::{CrawlStatus, CrawlSubmission, JobStatus, PageMetadata, PageResult};
pub use listing::BusinessListing;
