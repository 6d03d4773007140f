//! Word statistics over the inaugural addresses archived by The American
//! Presidency Project, available at <https://www.presidency.ucsb.edu>.
//!
//! The work is split into two batch stages, each with its own binary:
//!
//! - [`scrape`] downloads every inaugural address and stores its text under
//!   the raw data directory, one file per address.
//! - [`analyze`] tokenizes the stored corpus, computes per-word frequency and
//!   shape metadata, then writes a CSV table and a word cloud image.

pub mod analyze;
pub mod config;
pub mod dispatch;
pub mod progress;
pub mod scrape;

use log::LevelFilter;
use std::sync::OnceLock;

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Case-sensitive, punctuation-preserving word token
pub type Token = Box<str>;

/// Number of occurences of a token across the corpus
pub type Frequency = u64;

/// Set up logging
///
/// Can be called any number of times, only the first call has an effect and
/// later calls report the outcome of the first one.
pub fn setup_logging() -> Result<()> {
    static OUTCOME: OnceLock<Result<(), Box<str>>> = OnceLock::new();
    OUTCOME
        .get_or_init(|| {
            syslog::init(
                syslog::Facility::LOG_USER,
                if cfg!(feature = "log-trace") {
                    LevelFilter::Trace
                } else if cfg!(debug_assertions) {
                    LevelFilter::Debug
                } else {
                    LevelFilter::Info
                },
                None,
            )
            .map_err(|e| e.to_string().into_boxed_str())
        })
        .clone()
        .map_err(|e| anyhow::format_err!("{e}"))
}
