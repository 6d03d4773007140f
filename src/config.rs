//! Processing pipeline configuration

use crate::Result;
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Archive page that lists every inaugural address
pub const INAUGURALS_SOURCE_URL: &str =
    "https://www.presidency.ucsb.edu/documents/presidential-documents-archive-guidebook/inaugural-addresses";

/// Default root of the data directory tree
pub const DEFAULT_DATA_DIR: &str = "data";

/// Subdirectory of the data directory where scraped text files go
const RAW_SUBDIR: &str = "raw/inaugural-addresses";

/// Subdirectory of the data directory where analysis products go
const INTERIM_SUBDIR: &str = "interim";

/// File name of the per-word metadata table
const METADATA_FILE_NAME: &str = "inaugural_address_raw_words_metadata.csv";

/// File name of the word cloud image
const WORDCLOUD_FILE_NAME: &str = "inaugural_address_raw_words_wordcloud.png";

/// CLI arguments shared by both pipeline stages
#[derive(clap::Args, Clone, Debug)]
pub struct CommonArgs {
    /// Root of the data directory tree
    ///
    /// Scraped addresses are stored in `<data-dir>/raw/inaugural-addresses`,
    /// analysis products in `<data-dir>/interim`.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Maximum number of tasks that run in parallel
    ///
    /// By default, all available CPU cores are used.
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,
}
//
impl CommonArgs {
    /// Check CLI arguments for basic sanity
    pub fn check(&self) -> Result<()> {
        anyhow::ensure!(
            !self.data_dir.as_os_str().is_empty(),
            "the data directory path should not be empty"
        );
        Ok(())
    }
}

/// Final process configuration
///
/// Shared read-only by every task of a pipeline stage.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Root of the data directory tree
    pub data_dir: Box<Path>,

    /// Maximum number of tasks that run in parallel
    pub jobs: NonZeroUsize,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub fn new(args: CommonArgs) -> Arc<Self> {
        let CommonArgs { data_dir, jobs } = args;
        Arc::new(Self {
            data_dir: data_dir.into_boxed_path(),
            jobs: jobs.unwrap_or_else(default_jobs),
        })
    }

    /// Directory where scraped addresses are stored, one text file each
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join(RAW_SUBDIR)
    }

    /// Directory where analysis products are stored
    pub fn interim_dir(&self) -> PathBuf {
        self.data_dir.join(INTERIM_SUBDIR)
    }

    /// Location of the per-word metadata table
    pub fn metadata_path(&self) -> PathBuf {
        self.interim_dir().join(METADATA_FILE_NAME)
    }

    /// Location of the word cloud image
    pub fn wordcloud_path(&self) -> PathBuf {
        self.interim_dir().join(WORDCLOUD_FILE_NAME)
    }
}

/// Use every available processing unit by default
fn default_jobs() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
