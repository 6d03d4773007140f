//! Compute word statistics over the inaugural addresses stored in
//! `<data-dir>/raw/inaugural-addresses`.

use clap::Parser;
use inaugural_words::{
    analyze,
    config::{CommonArgs, Config},
    progress::ProgressReport,
    setup_logging, Result,
};

/// Analyze the raw words of the scraped inaugural addresses
///
/// Writes a table of per-word frequency and shape metadata, sorted by
/// decreasing frequency, and a word cloud image, both into
/// `<data-dir>/interim`.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    log::info!("Start.");

    let Args { common } = Args::parse();
    common.check()?;
    let config = Config::new(common);
    let report = ProgressReport::new();
    let summary = analyze::analyze_corpus(config, &report).await?;
    if summary.failed_files > 0 {
        log::warn!(
            "{} of {} corpus files could not be read",
            summary.failed_files,
            summary.files
        );
    }

    log::info!("Done.");
    Ok(())
}
