//! Discovery and tokenization of the stored addresses

use crate::{Result, Token};
use anyhow::Context;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, ErrorKind},
    path::{Path, PathBuf},
};

/// List the text files of the corpus, sorted by path
///
/// A missing directory is treated as an empty corpus.
pub fn discover(raw_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(raw_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Corpus directory {} does not exist", raw_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("listing {}", raw_dir.display()));
        }
    };
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", raw_dir.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") && path.is_file() {
            files.push(path);
        }
    }
    files.sort_unstable();
    Ok(files)
}

/// Split lines of text into whitespace-delimited tokens
///
/// Tokens keep their case and punctuation, and come out in reading order.
pub fn tokenize_lines<S: AsRef<str>>(
    lines: impl IntoIterator<Item = S>,
) -> impl Iterator<Item = Token> {
    lines.into_iter().flat_map(|line| {
        line.as_ref()
            .split_whitespace()
            .map(Token::from)
            .collect::<Vec<_>>()
    })
}

/// Read a corpus file line by line and split it into tokens
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>> {
    log::info!("Processing {} inaugural address file ...", path.display());
    let context = || format!("tokenizing {}", path.display());
    let file = File::open(path).with_context(context)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .with_context(context)?;
    let tokens = tokenize_lines(lines).collect::<Vec<_>>();
    log::debug!("Found {} tokens in {}", tokens.len(), path.display());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_preserve_order_case_and_punctuation() {
        let tokens = tokenize_lines(["Four score", "and seven years"]).collect::<Vec<_>>();
        assert_eq!(
            tokens,
            ["Four", "score", "and", "seven", "years"].map(Token::from)
        );
        let tokens = tokenize_lines(["  We, the People \t", "", "   ", "don't  U.S."])
            .collect::<Vec<_>>();
        assert_eq!(
            tokens,
            ["We,", "the", "People", "don't", "U.S."].map(Token::from)
        );
    }

    #[test]
    fn tokenize_file_reads_every_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("1861-abraham-lincoln.txt");
        std::fs::write(&path, "Fellow-Citizens of the\nUnited States:\r\n\nIn compliance").unwrap();
        let tokens = tokenize_file(&path).unwrap();
        assert_eq!(
            tokens,
            ["Fellow-Citizens", "of", "the", "United", "States:", "In", "compliance"]
                .map(Token::from)
        );
    }

    #[test]
    fn tokenize_file_reports_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let error = tokenize_file(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(format!("{error:#}").contains("missing.txt"));
    }

    #[test]
    fn discover_only_lists_text_files() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "notes.md"] {
            std::fs::write(tmp.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(tmp.path().join("dir.txt")).unwrap();
        let files = discover(tmp.path()).unwrap();
        assert_eq!(files, [tmp.path().join("a.txt"), tmp.path().join("b.txt")]);
    }

    #[test]
    fn missing_corpus_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(discover(&tmp.path().join("nowhere")).unwrap().is_empty());
    }
}
