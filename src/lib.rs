pub mod config;
pub mod error;
pub mod models;
pub mod firecrawl;
pub mod extract;
pub mod crawler;
pub mod output;

pub use config::{Config, CrawlConfig};
pub use error::{Error, Result};
pub use firecrawl::FirecrawlClient;
pub use crawler::Crawler;
