//! Word normalization, dictionary lookup, and anagram search for the
//! Scrabble word service.
//!
//! The crate has three layers:
//! - [`word`]: canonical word form, sorted-letter keys, letter multisets
//! - [`dictionary`]: the immutable word set loaded once at startup
//! - [`anagram`]: the sorted-letter-key index and sub-multiset search
//!
//! Both [`Dictionary`] and [`AnagramIndex`] are read-only after construction
//! and can be shared across threads behind an `Arc` without locking.

pub mod anagram;
pub mod dictionary;
pub mod error;
pub mod word;

// Re-export commonly used types
pub use anagram::{true_anagrams, AnagramIndex, DEFAULT_MAX_LEN};
pub use dictionary::Dictionary;
pub use error::{AnagramError, DictionaryError};
pub use word::{normalize, sorted_key, LetterMultiset};
