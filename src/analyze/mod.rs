//! Second pipeline stage: word statistics over the stored addresses
//!
//! Every corpus file is tokenized independently, tokens are tallied across the
//! whole corpus, and each distinct token gets classified. The resulting
//! metadata table and word cloud are then written concurrently.
//!
//! This stage only reads the corpus, so running it again on an unchanged
//! corpus yields the same outputs.

pub mod classify;
pub mod corpus;
pub mod frequency;
pub mod report;
pub mod wordcloud;

use self::{classify::WordMetadata, frequency::FrequencyTable, wordcloud::WordCloud};
use crate::{
    config::Config,
    dispatch,
    progress::{ProgressReport, Work},
    Frequency, Result, Token,
};
use anyhow::Context;
use std::sync::Arc;

/// Tally of an analysis run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnalysisSummary {
    /// Number of corpus files that were tokenized
    pub files: usize,

    /// Number of corpus files that could not be read
    pub failed_files: usize,

    /// Total number of tokens across the corpus
    pub tokens: Frequency,

    /// Number of distinct tokens
    pub distinct_tokens: usize,
}

/// Analyze the corpus found in the raw data directory, write the metadata
/// table and the word cloud into the interim data directory
pub async fn analyze_corpus(config: Arc<Config>, report: &ProgressReport) -> Result<AnalysisSummary> {
    // Tokenize the corpus and count tokens
    log::info!("Processing inaugural addresses files ...");
    let CorpusCounts {
        files,
        failed_files,
        table,
    } = count_tokens(&config, report)?;
    if table.is_empty() {
        log::warn!("No token found in the corpus");
    }
    log::info!(
        "Processing inaugural addresses files finished: {} tokens, {} distinct.",
        table.total(),
        table.len()
    );

    // Classify every distinct token
    log::info!("Processing inaugural addresses words ...");
    let rows = classify_tokens(&config, &table, report)?;
    let summary = AnalysisSummary {
        files,
        failed_files,
        tokens: table.total(),
        distinct_tokens: table.len(),
    };

    // Write the metadata table and the word cloud concurrently
    let table = Arc::new(table);
    let metadata_path = config.metadata_path();
    let wordcloud_path = config.wordcloud_path();
    log::info!("Saving inaugural addresses wordcloud at {}", wordcloud_path.display());
    let render = tokio::task::spawn_blocking(move || WordCloud::default().save(&table, &wordcloud_path));
    futures::try_join!(
        async {
            render
                .await
                .context("joining the word cloud renderer")
                .and_then(|result| result)
        },
        report::write(&metadata_path, rows),
    )?;
    log::info!("Processing inaugural addresses words finished.");
    Ok(summary)
}

/// Token counts along with how many corpus files contributed to them
struct CorpusCounts {
    files: usize,
    failed_files: usize,
    table: FrequencyTable,
}

/// Tally the tokens of each corpus file in parallel, then merge the tallies
fn count_tokens(config: &Config, report: &ProgressReport) -> Result<CorpusCounts> {
    let files = corpus::discover(&config.raw_dir())?;
    let num_files = files.len();
    let progress = report.add("Tokenizing corpus files", Work::Steps(num_files));
    let outcome = dispatch::run_parallel(files, config.jobs, &progress, |path| {
        corpus::tokenize_file(&path).map(FrequencyTable::from_iter)
    })?;
    let failed_files = outcome.failures().len();
    let table = outcome
        .log_failures_and_keep_successes("tokenizing a corpus file")
        .into_iter()
        .fold(FrequencyTable::new(), |mut table, file_table| {
            table.merge(file_table);
            table
        });
    Ok(CorpusCounts {
        files: num_files,
        failed_files,
        table,
    })
}

/// Classify each distinct token in parallel
fn classify_tokens(
    config: &Config,
    table: &FrequencyTable,
    report: &ProgressReport,
) -> Result<Vec<WordMetadata>> {
    let words = table
        .iter()
        .map(|(word, frequency)| (Token::from(word), frequency))
        .collect::<Vec<_>>();
    let progress = report.add("Classifying words", Work::PercentSteps(words.len()));
    let outcome = dispatch::run_parallel(words, config.jobs, &progress, |(word, frequency)| {
        Ok(WordMetadata::new(word, frequency))
    })?;
    Ok(outcome.log_failures_and_keep_successes("classifying a word"))
}
