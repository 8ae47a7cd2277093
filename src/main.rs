use clap::Parser;
use tracing_subscriber::EnvFilter;

use bizcrawl::{output, Config, Crawler, CrawlConfig, FirecrawlClient};

#[derive(Parser, Debug)]
#[command(name = "bizcrawl")]
#[command(version = "0.1.0")]
#[command(about = "Extract business listing data via the Firecrawl API")]
struct Args {
    /// Listing page URLs to crawl
    #[arg(required = true)]
    urls: Vec<String>,

    /// Output format (csv, json, text)
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Maximum status polling attempts per job
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Seconds between status polls
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Maximum crawl jobs in flight
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bizcrawl=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let mut crawl_config = CrawlConfig::from(&config);
    if let Some(max_attempts) = args.max_attempts {
        crawl_config.max_poll_attempts = max_attempts;
    }
    if let Some(poll_interval) = args.poll_interval {
        crawl_config.poll_interval_secs = poll_interval;
    }
    if let Some(concurrency) = args.concurrency {
        crawl_config.concurrency_limit = concurrency;
    }

    // Initialize client
    let client = FirecrawlClient::with_base_url(&config.api_key, &config.base_url)?;

    // Run crawl
    tracing::info!("Starting crawl of {} listing page(s)", args.urls.len());
    let crawler = Crawler::new(client, crawl_config);
    let listings = crawler.crawl_listings(&args.urls).await?;

    if listings.is_empty() {
        tracing::warn!("No listings extracted");
    } else {
        tracing::info!("Extracted {} listing record(s)", listings.len());
    }

    // Output results
    output::write_listings(&listings, &args.format, args.output.as_deref())?;

    Ok(())
}
