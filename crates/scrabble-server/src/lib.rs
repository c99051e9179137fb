//! HTTP/JSON API server for Scrabble word validation and anagram lookup.
//!
//! Exposes the [`scrabble_core`] dictionary and anagram index over a small
//! REST API. This crate contains the configuration layer, API schema types,
//! error handling, handlers, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
