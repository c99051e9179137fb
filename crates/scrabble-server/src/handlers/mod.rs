//! HTTP handler modules for the Scrabble word API.
//!
//! Each sub-module implements thin handlers that parse requests, normalize
//! the word, delegate to [`scrabble_core`], and return JSON responses.
//! No lookup logic lives in handlers.

pub mod anagrams;
pub mod fallback;
pub mod info;
pub mod search;
