//! First pipeline stage: download every inaugural address from the archive
//!
//! The listing page is fetched and parsed into address links, then each
//! address page is independently fetched, parsed and stored as a text file in
//! the raw data directory. Pages that lack an author, a date or a body are
//! dropped without error.

pub mod detail;
pub mod fetch;
pub mod listing;
pub mod slug;
pub mod store;

use crate::{
    config::Config,
    dispatch,
    progress::{ProgressReport, Work},
    Result,
};
use anyhow::Context;
use fetch::Fetcher;
use std::{path::PathBuf, sync::Arc};

/// What happened to one address page
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressOutcome {
    /// The address was stored at this location
    Saved(PathBuf),

    /// The page lacked some field, nothing was stored
    Incomplete,
}

/// Tally of a scraping run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScrapeSummary {
    /// Number of address links found on the listing page
    pub links: usize,

    /// Number of addresses that were stored
    pub saved: usize,

    /// Number of pages dropped for lack of some field
    pub incomplete: usize,

    /// Number of pages that could not be downloaded or stored
    pub failed: usize,
}

/// Scrape every address linked from the listing page at `source_url`
///
/// Only failing to fetch the listing page is an error. Failures on individual
/// address pages are logged and counted in the summary.
pub async fn scrape_all(
    config: Arc<Config>,
    source_url: &str,
    report: &ProgressReport,
) -> Result<ScrapeSummary> {
    let fetcher = Fetcher::new()?;

    // Collect address links
    log::info!("Scraping inaugural addresses urls ...");
    let listing = fetcher
        .fetch(source_url)
        .await
        .context("fetching the inaugural addresses listing")?;
    let links = listing::address_links(&listing);
    let num_links = links.len();
    log::info!("Scraping inaugural addresses urls finished, found {num_links} links.");

    // Scrape the addresses
    log::info!("Scraping inaugural addresses data ...");
    let progress = report.add("Scraping inaugural addresses", Work::Steps(num_links));
    let outcome = dispatch::run_async(links, config.jobs, &progress, |url| {
        scrape_address(config.clone(), fetcher.clone(), url)
    })
    .await;
    let failed = outcome.failures().len();
    let mut summary = ScrapeSummary {
        links: num_links,
        failed,
        ..ScrapeSummary::default()
    };
    for address in outcome.log_failures_and_keep_successes("scraping an inaugural address") {
        match address {
            AddressOutcome::Saved(_) => summary.saved += 1,
            AddressOutcome::Incomplete => summary.incomplete += 1,
        }
    }
    log::info!(
        "Scraping inaugural addresses data finished: {} saved, {} incomplete, {} failed.",
        summary.saved,
        summary.incomplete,
        summary.failed
    );
    Ok(summary)
}

/// Download, parse and store a single address
pub async fn scrape_address(
    config: Arc<Config>,
    fetcher: Fetcher,
    url: Box<str>,
) -> Result<AddressOutcome> {
    log::info!("Scraping inaugural address {url} ...");
    let markup = fetcher.fetch(&url).await?;
    let outcome = match detail::parse(&markup) {
        Some(document) => {
            let path = store::save(&config.raw_dir(), &document)
                .await
                .with_context(|| format!("storing the inaugural address from {url}"))?;
            AddressOutcome::Saved(path)
        }
        None => {
            log::debug!("Dropped {url} because its author, year or text is missing");
            AddressOutcome::Incomplete
        }
    };
    log::info!("Scraping inaugural address {url} finished.");
    Ok(outcome)
}
