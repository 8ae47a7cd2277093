use std::io::Write;

use crate::error::Result;
use crate::models::BusinessListing;

/// Renders listings in the requested format and writes them to the given
/// path, or stdout when no path is set.
pub fn write_listings(
    listings: &[BusinessListing],
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let rendered = render(listings, format)?;

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        tracing::info!("Output written to: {}", path);
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered.trim_end())?;
    }

    Ok(())
}

fn render(listings: &[BusinessListing], format: &str) -> Result<String> {
    match format {
        "csv" => format_csv(listings),
        "json" => Ok(serde_json::to_string_pretty(listings)?),
        _ => Ok(format_text(listings)),
    }
}

fn format_csv(listings: &[BusinessListing]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Header row goes out even when there are no records.
    writer.write_record([
        "company_description",
        "company_industry",
        "who_they_serve",
        "source_url",
        "scraped_at",
    ])?;

    for listing in listings {
        writer.write_record([
            listing.company_description.as_str(),
            listing.company_industry.as_str(),
            listing.who_they_serve.as_str(),
            listing.source_url.as_str(),
            &listing.scraped_at.to_rfc3339(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::Error::ParseError(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| crate::error::Error::ParseError(format!("CSV encoding error: {}", e)))
}

fn format_text(listings: &[BusinessListing]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Listings ({}) ===\n", listings.len()));

    for listing in listings {
        output.push_str(&format!("\n{}\n", listing.source_url));
        output.push_str(&format!("  Description: {}\n", listing.company_description));
        output.push_str(&format!("  Industry: {}\n", listing.company_industry));
        output.push_str(&format!("  Serves: {}\n", listing.who_they_serve));
        output.push_str(&format!(
            "  Scraped: {}\n",
            listing.scraped_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}
