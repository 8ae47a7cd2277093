use serde_json::json;

use crate::firecrawl::{CrawlRequest, CrawlerOptions};

pub const EXTRACTION_PROMPT: &str = "Extract the company description (in one sentence explain \
what the company does), company industry (software, services, AI, etc.) - this really should \
just be a tag with a couple keywords, and who they serve (who are their customers). If there \
is no clear information to answer the question, write 'no info'.";

/// JSON schema the extraction must conform to. All three fields are
/// required strings; absent information comes back as 'no info'.
pub fn extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "company_description": { "type": "string" },
            "company_industry": { "type": "string" },
            "who_they_serve": { "type": "string" }
        },
        "required": [
            "company_description",
            "company_industry",
            "who_they_serve"
        ]
    })
}

/// Builds the llm-extraction crawl request for a listing page.
pub fn listing_request(url: &str) -> CrawlRequest {
    CrawlRequest {
        url: url.to_string(),
        crawler_options: CrawlerOptions {
            mode: "llm-extraction".to_string(),
            extraction_prompt: EXTRACTION_PROMPT.to_string(),
            extraction_schema: extraction_schema(),
        },
    }
}
