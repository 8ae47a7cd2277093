use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for fields the extraction could not answer.
pub const NO_INFO: &str = "no info";

/// One extracted business listing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessListing {
    pub company_description: String,
    pub company_industry: String,
    pub who_they_serve: String,
    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

impl BusinessListing {
    pub fn new(
        company_description: Option<String>,
        company_industry: Option<String>,
        who_they_serve: Option<String>,
        source_url: String,
    ) -> Self {
        Self {
            company_description: or_no_info(company_description),
            company_industry: or_no_info(company_industry),
            who_they_serve: or_no_info(who_they_serve),
            source_url,
            scraped_at: Utc::now(),
        }
    }
}

fn or_no_info(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NO_INFO.to_string(),
    }
}
