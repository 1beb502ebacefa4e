//! Institute catalog: scraped from the portal's allotment index, with a
//! range-generated placeholder catalog when the page cannot be fetched.

use reqwest::Client;
use scraper::{Html, Selector};
use std::ops::Range;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::DseError;
use crate::models::{Catalog, CatalogSource, Institution};

/// Institute code blocks used when the index page is unavailable.
pub const FALLBACK_CODE_RANGES: [Range<u32>; 8] = [
    1002..1300,   // Amravati region
    2008..2800,   // Aurangabad region
    3012..3600,   // Mumbai region
    4004..4800,   // Nagpur region
    5003..5600,   // North Maharashtra
    6004..7000,   // Pune region
    14005..14006,
    16006..16200,
];

/// Fetch and parse the index page, substituting the fallback catalog on any error.
pub async fn build_catalog(client: &Client, config: &Config) -> Catalog {
    println!("Fetching college data from index page...");

    match scrape_catalog(client, &config.index_url).await {
        Ok(catalog) => {
            println!("Found {} colleges", catalog.len());
            if catalog.is_empty() {
                warn!("Index page at {} had no institute rows", config.index_url);
            }
            catalog
        }
        Err(e) => {
            warn!("Catalog scrape failed, using fallback ranges: {}", e);
            println!("Error scraping college data: {}", e);
            println!("Using fallback institute codes...");
            fallback_catalog()
        }
    }
}

pub async fn scrape_catalog(client: &Client, index_url: &str) -> Result<Catalog, DseError> {
    debug!("Fetching institute index from: {}", index_url);
    let response = client.get(index_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DseError::Status {
            status,
            url: index_url.to_string(),
        });
    }

    let body = response.text().await?;
    let catalog = parse_catalog_html(&body)?;
    info!("Scraped {} institutes from {}", catalog.len(), index_url);
    Ok(catalog)
}

/// Parse `<tr>` rows (after the first) of `sr no | code | name` cells.
/// Rows with fewer than three cells or a non-numeric code are skipped;
/// a repeated code keeps the last row seen.
pub fn parse_catalog_html(html: &str) -> Result<Catalog, DseError> {
    let row_selector = Selector::parse("tr").map_err(|e| DseError::Selector(e.to_string()))?;
    let cell_selector = Selector::parse("td").map_err(|e| DseError::Selector(e.to_string()))?;

    let document = Html::parse_document(html);
    let mut catalog = Catalog::new(CatalogSource::Scraped);

    for row in document.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().map(str::trim).collect::<String>())
            .collect();
        if cells.len() < 3 {
            continue;
        }

        let code = &cells[1];
        if !is_numeric_code(code) {
            debug!("Skipping row with non-numeric code '{}'", code);
            continue;
        }

        catalog.insert(Institution {
            sr_no: cells[0].clone(),
            code: code.clone(),
            name: cells[2].clone(),
        });
    }

    Ok(catalog)
}

/// Placeholder catalog covering every code in [`FALLBACK_CODE_RANGES`].
pub fn fallback_catalog() -> Catalog {
    let mut catalog = Catalog::new(CatalogSource::Fallback);
    for range in FALLBACK_CODE_RANGES {
        for code in range {
            catalog.insert(Institution {
                code: code.to_string(),
                name: format!("Institute {}", code),
                sr_no: String::new(),
            });
        }
    }
    catalog
}

fn is_numeric_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_digit())
}
