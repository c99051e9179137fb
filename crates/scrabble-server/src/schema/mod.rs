//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one route
//! family. Types use serde derives for JSON serialization/deserialization.

pub mod anagrams;
pub mod info;
pub mod search;
