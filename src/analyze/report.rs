//! CSV table of per-word metadata

use super::classify::WordMetadata;
use crate::Result;
use anyhow::Context;
use csv_async::AsyncWriterBuilder;
use rayon::prelude::*;
use std::path::Path;
use tokio::fs::{self, File};

/// Column names of the metadata table
pub const METADATA_HEADERS: [&str; 5] = [
    "word",
    "frequency",
    "has_special_chars",
    "has_nums",
    "has_contraction",
];

/// Order rows by decreasing frequency, ties by increasing word
pub fn sort_rows(rows: &mut [WordMetadata]) {
    rows.par_sort_unstable_by(|row1, row2| {
        row2.frequency
            .cmp(&row1.frequency)
            .then_with(|| row1.word.cmp(&row2.word))
    });
}

/// Sort rows and write them as a CSV table with a header row
///
/// Parent directories are created as needed, any previous table is
/// overwritten.
pub async fn write(path: &Path, mut rows: Vec<WordMetadata>) -> Result<()> {
    let rows = tokio::task::spawn_blocking(move || {
        sort_rows(&mut rows);
        rows
    })
    .await
    .context("joining the metadata sorter")?;
    log::info!("Saving inaugural addresses words metadata at {}", path.display());
    let context = || format!("writing words metadata to {}", path.display());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.with_context(context)?;
    }
    let file = File::create(path).await.with_context(context)?;

    // The serializer only emits a header along with the first row
    if rows.is_empty() {
        let mut writer = AsyncWriterBuilder::new().create_writer(file);
        writer.write_record(METADATA_HEADERS).await.with_context(context)?;
        writer.flush().await.with_context(context)?;
        return Ok(());
    }
    let mut writer = AsyncWriterBuilder::new().create_serializer(file);
    for row in &rows {
        writer.serialize(row).await.with_context(context)?;
    }
    writer.flush().await.with_context(context)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Frequency;

    fn row(word: &str, frequency: Frequency) -> WordMetadata {
        WordMetadata::new(word.into(), frequency)
    }

    #[test]
    fn rows_sorted_by_decreasing_frequency() {
        let mut rows = vec![row("of", 5), row("the", 9), row("a", 5), row("Union", 1)];
        sort_rows(&mut rows);
        let order = rows.iter().map(|r| &*r.word).collect::<Vec<_>>();
        assert_eq!(order, ["the", "a", "of", "Union"]);
    }

    #[tokio::test]
    async fn writes_header_and_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("interim/metadata.csv");
        write(&path, vec![row("don't", 2), row("1600", 1), row("people,", 7)])
            .await
            .unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            csv,
            "word,frequency,has_special_chars,has_nums,has_contraction\n\
             \"people,\",7,True,False,False\n\
             don't,2,True,False,True\n\
             1600,1,False,True,False\n"
        );
    }

    #[tokio::test]
    async fn empty_table_still_has_a_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("metadata.csv");
        write(&path, Vec::new()).await.unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv, "word,frequency,has_special_chars,has_nums,has_contraction\n");
    }
}
