use crate::error::{Error, Result};
use crate::models::{BusinessListing, CrawlStatus, PageResult};

/// Converts a completed crawl status into listing records, one per page.
///
/// Fields come from the llm_extraction payload when present; the
/// description falls back to the page metadata description otherwise.
pub fn listings_from_status(url: &str, status: &CrawlStatus) -> Result<Vec<BusinessListing>> {
    let pages = status
        .data
        .as_ref()
        .filter(|pages| !pages.is_empty())
        .ok_or_else(|| Error::EmptyResult(url.to_string()))?;

    Ok(pages.iter().map(|page| listing_from_page(url, page)).collect())
}

fn listing_from_page(url: &str, page: &PageResult) -> BusinessListing {
    let extraction = page.llm_extraction.as_ref();

    let description = extraction
        .and_then(|e| string_field(e, "company_description"))
        .or_else(|| {
            page.metadata
                .as_ref()
                .and_then(|m| m.description.clone())
        });
    let industry = extraction.and_then(|e| string_field(e, "company_industry"));
    let who_they_serve = extraction.and_then(|e| string_field(e, "who_they_serve"));

    let source_url = page
        .metadata
        .as_ref()
        .and_then(|m| m.source_url.clone())
        .unwrap_or_else(|| url.to_string());

    BusinessListing::new(description, industry, who_they_serve, source_url)
}

// Blank extraction values count as absent so fallbacks still apply.
fn string_field(value: &serde_json::Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::NO_INFO;
    use crate::models::JobStatus;

    fn completed(data: Option<Vec<PageResult>>) -> CrawlStatus {
        CrawlStatus {
            status: JobStatus::Completed,
            current: None,
            total: None,
            data,
        }
    }

    fn page(body: serde_json::Value) -> PageResult {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_listing_from_llm_extraction() {
        let status = completed(Some(vec![page(serde_json::json!({
            "metadata": { "sourceURL": "https://example.com/listing/1" },
            "llm_extraction": {
                "company_description": "Distributes kitchen fixtures",
                "company_industry": "wholesale",
                "who_they_serve": "contractors"
            }
        }))]));

        let listings = listings_from_status("https://example.com/listing/1", &status).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].company_description, "Distributes kitchen fixtures");
        assert_eq!(listings[0].company_industry, "wholesale");
        assert_eq!(listings[0].who_they_serve, "contractors");
        assert_eq!(listings[0].source_url, "https://example.com/listing/1");
    }

    #[test]
    fn test_description_falls_back_to_metadata() {
        let status = completed(Some(vec![page(serde_json::json!({
            "metadata": { "description": "Established distributor for sale" }
        }))]));

        let listings = listings_from_status("https://example.com/listing/2", &status).unwrap();
        assert_eq!(listings[0].company_description, "Established distributor for sale");
        assert_eq!(listings[0].company_industry, NO_INFO);
        assert_eq!(listings[0].who_they_serve, NO_INFO);
        // No sourceURL in metadata, so the requested url is kept.
        assert_eq!(listings[0].source_url, "https://example.com/listing/2");
    }

    #[test]
    fn test_blank_extraction_still_falls_back_to_metadata() {
        let status = completed(Some(vec![page(serde_json::json!({
            "metadata": { "description": "Turnkey distributor for sale" },
            "llm_extraction": {
                "company_description": "",
                "company_industry": "  ",
                "who_they_serve": "contractors"
            }
        }))]));

        let listings = listings_from_status("https://example.com/listing/4", &status).unwrap();
        assert_eq!(listings[0].company_description, "Turnkey distributor for sale");
        assert_eq!(listings[0].company_industry, NO_INFO);
        assert_eq!(listings[0].who_they_serve, "contractors");
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let status = completed(Some(Vec::new()));
        let err = listings_from_status("https://example.com/listing/3", &status).unwrap_err();
        assert!(matches!(err, Error::EmptyResult(_)));

        let status = completed(None);
        let err = listings_from_status("https://example.com/listing/3", &status).unwrap_err();
        assert!(matches!(err, Error::EmptyResult(_)));
    }
}
