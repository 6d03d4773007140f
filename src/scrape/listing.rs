//! Extraction of address links from the archive's listing page

use scraper::{Html, Selector};

/// Links to inaugural address pages within the listing table
const ADDRESS_LINK_SELECTOR: &str =
    r#"div.field-body > table > tbody > tr > td > a[href*="inaugural"]"#;

/// Extract the URL of every inaugural address from the listing page markup
///
/// Links are returned in document order, trimmed, without deduplication.
/// Anchors with a missing or blank `href` are skipped.
pub fn address_links(markup: &str) -> Vec<Box<str>> {
    let selector = Selector::parse(ADDRESS_LINK_SELECTOR)
        .expect("the address link selector should be a valid CSS selector");
    let document = Html::parse_document(markup);
    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(Box::from)
        .collect()
}
