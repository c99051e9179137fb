//! Canonical word form and letter bookkeeping.
//!
//! Every lookup goes through [`normalize`] first. [`sorted_key`] and
//! [`LetterMultiset`] describe a word by its letters alone, which is what the
//! anagram index groups on.

use std::collections::BTreeMap;

/// Returns the canonical form of a word: surrounding whitespace trimmed,
/// then lowercased.
///
/// No other normalization is applied (diacritics are kept, length is not
/// bounded).
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the word's characters sorted into code-point order.
///
/// Two words share a key exactly when one is a permutation of the other.
pub fn sorted_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Count of each character occurring in a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: BTreeMap<char, usize>,
}

impl LetterMultiset {
    /// Builds the multiset of `word`'s characters.
    pub fn of(word: &str) -> Self {
        let mut counts = BTreeMap::new();
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        LetterMultiset { counts }
    }

    /// How many times `c` occurs.
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of characters, counting repeats.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct characters.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterates `(char, count)` pairs in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Returns true if every character of `other` is available here with at
    /// least the same count.
    pub fn contains(&self, other: &LetterMultiset) -> bool {
        other.iter().all(|(c, n)| self.count(c) >= n)
    }
}

impl From<&str> for LetterMultiset {
    fn from(word: &str) -> Self {
        LetterMultiset::of(word)
    }
}
