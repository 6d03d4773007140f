//! Download every inaugural address from The American Presidency Project
//! archive into `<data-dir>/raw/inaugural-addresses`, one text file per address.

use clap::Parser;
use inaugural_words::{
    config::{CommonArgs, Config, INAUGURALS_SOURCE_URL},
    progress::ProgressReport,
    scrape, setup_logging, Result,
};

/// Scrape inaugural addresses into text files
///
/// Each address is stored as `<year>-<president>.txt`. Addresses whose page
/// lacks a president name, a date or a text are skipped. Failures on single
/// addresses are logged and do not stop the others.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Archive page that links to every inaugural address
    #[arg(long, default_value = INAUGURALS_SOURCE_URL)]
    source_url: Box<str>,
}
//
impl Args {
    /// Decode and validate CLI arguments
    fn parse_and_check() -> Result<Self> {
        let args = Args::parse();
        args.common.check()?;
        anyhow::ensure!(
            args.source_url.starts_with("http://") || args.source_url.starts_with("https://"),
            "the source URL should be an HTTP(S) URL"
        );
        Ok(args)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    log::info!("Start.");

    let Args { common, source_url } = Args::parse_and_check()?;
    let config = Config::new(common);
    let report = ProgressReport::new();
    scrape::scrape_all(config, &source_url, &report).await?;

    log::info!("Done.");
    Ok(())
}
