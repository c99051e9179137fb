//! Anagram search over a sorted-letter-key index.
//!
//! [`AnagramIndex`] groups dictionary words by [`sorted_key`]. A search walks
//! every distinct sub-multiset of the input's letters, builds that subset's
//! key directly in sorted order, and looks it up in the index. This costs
//! one map lookup per sub-multiset (at most `2^n` for `n` distinct letters)
//! instead of generating permutations.
//!
//! Search results include shorter sub-word matches. Callers wanting
//! same-length anagrams pass the result through [`true_anagrams`].

use std::collections::{BTreeSet, HashMap};

use crate::dictionary::Dictionary;
use crate::error::AnagramError;
use crate::word::{sorted_key, LetterMultiset};

/// Default input length limit for [`AnagramIndex::anagrams_of`], in characters.
pub const DEFAULT_MAX_LEN: usize = 15;

/// Dictionary words grouped by sorted-letter key.
#[derive(Debug, Clone)]
pub struct AnagramIndex {
    groups: HashMap<String, Vec<String>>,
    max_len: usize,
}

impl AnagramIndex {
    /// Builds the index from every word in `dictionary`.
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();
        for word in dictionary.iter() {
            groups
                .entry(sorted_key(word))
                .or_default()
                .push(word.to_string());
        }
        for words in groups.values_mut() {
            words.sort_unstable();
        }
        AnagramIndex {
            groups,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Sets the input length limit (in characters) for searches.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of distinct sorted-letter keys.
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// Words that are exact permutations of `word`'s letters, `word` included
    /// if it is in the dictionary.
    pub fn permutations_of(&self, word: &str) -> &[String] {
        self.groups
            .get(&sorted_key(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns every dictionary word formable from a sub-multiset of
    /// `word`'s letters, sorted and without duplicates.
    ///
    /// `word` should already be normalized. An empty word yields an empty
    /// result. Characters no dictionary word uses simply never match.
    pub fn anagrams_of(&self, word: &str) -> Result<Vec<String>, AnagramError> {
        let len = word.chars().count();
        if len == 0 {
            return Ok(Vec::new());
        }
        if len > self.max_len {
            return Err(AnagramError::TooLong {
                len,
                max: self.max_len,
            });
        }

        let letters: Vec<(char, usize)> = LetterMultiset::of(word).iter().collect();
        let mut found = BTreeSet::new();
        let mut key = String::with_capacity(word.len());
        self.collect_subsets(&letters, &mut key, &mut found);
        Ok(found.into_iter().collect())
    }

    /// Depth-first walk choosing `0..=count` copies of each distinct letter.
    ///
    /// `letters` is in code-point order, so appending to `key` keeps it a
    /// valid sorted key at every leaf.
    fn collect_subsets(
        &self,
        letters: &[(char, usize)],
        key: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        let Some((&(c, count), rest)) = letters.split_first() else {
            if let Some(words) = self.groups.get(key.as_str()) {
                found.extend(words.iter().cloned());
            }
            return;
        };

        let base = key.len();
        self.collect_subsets(rest, key, found);
        for _ in 0..count {
            key.push(c);
            self.collect_subsets(rest, key, found);
        }
        key.truncate(base);
    }
}

/// Filters search results down to true anagrams of `word`: candidates with
/// the same number of characters that are not `word` itself.
pub fn true_anagrams(word: &str, candidates: Vec<String>) -> Vec<String> {
    let len = word.chars().count();
    candidates
        .into_iter()
        .filter(|candidate| candidate != word && candidate.chars().count() == len)
        .collect()
}
