//! Exact token frequency tally

use crate::{Frequency, Token};
use std::collections::{hash_map, HashMap};

/// Number of occurences of each distinct token across the corpus
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrequencyTable(HashMap<Token, Frequency>);
//
impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurence of a token
    pub fn add(&mut self, token: Token) {
        *self.0.entry(token).or_insert(0) += 1;
    }

    /// Merge with counts from another table
    pub fn merge(&mut self, other: Self) {
        for (token, count) in other.0 {
            match self.0.entry(token) {
                hash_map::Entry::Occupied(o) => *o.into_mut() += count,
                hash_map::Entry::Vacant(v) => {
                    v.insert(count);
                }
            }
        }
    }

    /// Number of occurences of a token
    pub fn get(&self, token: &str) -> Frequency {
        self.0.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Truth that no token was counted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of counted occurences
    pub fn total(&self) -> Frequency {
        self.0.values().sum()
    }

    /// Iterate over tokens and their frequencies, in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Frequency)> + '_ {
        self.0.iter().map(|(token, &count)| (&**token, count))
    }

    /// Tokens and frequencies by decreasing frequency, then increasing token
    pub fn by_decreasing_frequency(&self) -> Vec<(&str, Frequency)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|(token1, count1), (token2, count2)| {
            count2.cmp(count1).then_with(|| token1.cmp(token2))
        });
        entries
    }
}
//
impl FromIterator<Token> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut table = Self::new();
        for token in iter {
            table.add(token);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(tokens: &[&str]) -> FrequencyTable {
        tokens.iter().map(|&t| Token::from(t)).collect()
    }

    #[test]
    fn exact_tally() {
        let table = table(&["a", "b", "a", "c", "a"]);
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.get("d"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let table = table(&["The", "the", "the"]);
        assert_eq!(table.get("The"), 1);
        assert_eq!(table.get("the"), 2);
    }

    #[test]
    fn merging_adds_counts() {
        let mut left = table(&["union", "liberty", "union"]);
        left.merge(table(&["union", "people"]));
        assert_eq!(left.get("union"), 3);
        assert_eq!(left.get("liberty"), 1);
        assert_eq!(left.get("people"), 1);
        assert_eq!(left.total(), 5);

        let mut empty = FrequencyTable::new();
        assert!(empty.is_empty());
        empty.merge(left.clone());
        assert_eq!(empty, left);
    }

    #[test]
    fn decreasing_frequency_with_deterministic_ties() {
        let counts = table(&["b", "a", "c", "c", "b", "c"]);
        assert_eq!(counts.by_decreasing_frequency(), [("c", 3), ("b", 2), ("a", 1)]);
        let tied = table(&["y", "x", "z"]);
        assert_eq!(tied.by_decreasing_frequency(), [("x", 1), ("y", 1), ("z", 1)]);
    }
}
