//! Lexical shape of corpus tokens

use crate::{Frequency, Token};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Frequency and shape metadata about one distinct token
///
/// Field names and order match the columns of the metadata table.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct WordMetadata {
    /// Token, as it appears in the corpus
    pub word: Token,

    /// Number of occurences across the corpus
    pub frequency: Frequency,

    /// Truth that the token contains something else than ASCII letters,
    /// digits and whitespace
    #[serde(serialize_with = "capitalized_bool")]
    pub has_special_chars: bool,

    /// Truth that the token contains a decimal digit
    #[serde(rename = "has_nums", serialize_with = "capitalized_bool")]
    pub has_digits: bool,

    /// Truth that the token contains an apostrophe
    #[serde(serialize_with = "capitalized_bool")]
    pub has_contraction: bool,
}
//
impl WordMetadata {
    /// Classify a token
    pub fn new(word: Token, frequency: Frequency) -> Self {
        Self {
            has_special_chars: has_special_chars(&word),
            has_digits: has_digits(&word),
            has_contraction: has_contraction(&word),
            word,
            frequency,
        }
    }
}

/// Flags are written as `True`/`False`, the way pandas tables spell them
fn capitalized_bool<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

/// Truth that some text contains something else than ASCII letters, digits
/// and whitespace
pub fn has_special_chars(text: &str) -> bool {
    text.chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c.is_whitespace()))
}

/// Truth that some text contains a decimal digit, in any script
pub fn has_digits(text: &str) -> bool {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    DIGIT
        .get_or_init(|| Regex::new(r"\d").expect("digit regex is valid"))
        .is_match(text)
}

/// Truth that some text contains an apostrophe
pub fn has_contraction(text: &str) -> bool {
    text.contains('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        assert!(has_contraction("don't"));
        assert!(has_special_chars("don't"));
        assert!(!has_digits("don't"));

        assert!(!has_special_chars("hello"));
        assert!(!has_digits("hello"));
        assert!(!has_contraction("hello"));

        assert!(has_digits("1600"));
        assert!(!has_special_chars("1600"));
    }

    #[test]
    fn no_normalization_before_testing() {
        assert!(has_special_chars("U.S."));
        assert!(has_special_chars("—"));
        assert!(has_special_chars("café"));
        assert!(has_special_chars("nation’s"));
        assert!(!has_contraction("nation’s"));
        assert!(has_digits("1776,"));
    }

    #[test]
    fn digits_from_any_script() {
        assert!(has_digits("\u{661}\u{667}\u{667}\u{666}"));
        assert!(has_digits("\u{967}\u{96F}"));
        assert!(!has_digits("½"));
        assert!(!has_digits("IV"));
    }

    #[test]
    fn metadata_row() {
        let row = WordMetadata::new("'76".into(), 4);
        assert_eq!(
            row,
            WordMetadata {
                word: "'76".into(),
                frequency: 4,
                has_special_chars: true,
                has_digits: true,
                has_contraction: true,
            }
        );
    }
}
