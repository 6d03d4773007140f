//! HTTP retrieval of archive pages

use crate::Result;
use anyhow::Context;
use rand::seq::SliceRandom;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Response,
};

/// Headers of a browser navigation request, minus the user agent
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("cache-control", "no-cache"),
    ("pragma", "no-cache"),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
];

/// Chrome on Linux browser identities, one is picked at random per request
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/77.0.3865.75 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
];

/// HTTP client that presents itself as a desktop web browser
///
/// Cheap to clone, clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Fetcher(reqwest::Client);
//
impl Fetcher {
    /// Set up the HTTP client
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len());
        for (name, value) in BROWSER_HEADERS {
            headers.insert(*name, HeaderValue::from_static(*value));
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("setting up the HTTP client")?;
        Ok(Self(client))
    }

    /// Download the page at some URL as text
    ///
    /// Non-2xx responses are reported as errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let context = || format!("downloading {url}");
        let response = self
            .0
            .get(url)
            .header(header::USER_AGENT, random_user_agent())
            .send()
            .await
            .and_then(Response::error_for_status)
            .with_context(context)?;
        response.text().await.with_context(context)
    }
}

/// Pick one of the known browser identities
fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
