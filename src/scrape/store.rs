//! Persistence of scraped addresses

use super::detail::Document;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Location where an address is stored within the raw data directory
pub fn document_path(raw_dir: &Path, document: &Document) -> PathBuf {
    raw_dir.join(format!("{}.txt", document.slug()))
}

/// Write some text as the full content of a file, creating parent directories
/// as needed and overwriting any previous content
pub async fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, text)
        .await
        .with_context(|| format!("writing {}", path.display()))
}

/// Store an address into the raw data directory, return where it went
pub async fn save(raw_dir: &Path, document: &Document) -> Result<PathBuf> {
    let path = document_path(raw_dir, document);
    log::info!("Saving inaugural address at {}", path.display());
    write_text(&path, &document.body).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(author: &str, year: &str, body: &str) -> Document {
        Document {
            author: author.into(),
            year: year.into(),
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn creates_directories_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let raw_dir = tmp.path().join("raw/inaugural-addresses");

        let first = document("John Adams", "1797", "When it was first perceived");
        let path = save(&raw_dir, &first).await.unwrap();
        assert_eq!(path, raw_dir.join("1797-john-adams.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "When it was first perceived");

        // Same slug: last writer wins
        let second = document("John  Adams!", "1797", "Overwritten");
        assert_eq!(save(&raw_dir, &second).await.unwrap(), path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Overwritten");
    }

    #[tokio::test]
    async fn body_is_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a/b/c.txt");
        write_text(&path, "line one\nline two").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line one\nline two");
    }
}
