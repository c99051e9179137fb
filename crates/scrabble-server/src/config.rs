//! Server configuration read from environment variables.
//!
//! - `SCRABBLE_WORDS_PATH`: dictionary JSON file (default: "words.json")
//! - `SCRABBLE_HOST`: listen address (default: "0.0.0.0")
//! - `PORT`: listen port (default: "3000")
//! - `SCRABBLE_MAX_ANAGRAM_LEN`: longest word accepted by `/anagrams`
//!   (default: [`DEFAULT_MAX_LEN`])

use std::path::PathBuf;
use std::str::FromStr;

use scrabble_core::DEFAULT_MAX_LEN;
use thiserror::Error;

pub const WORDS_PATH_VAR: &str = "SCRABBLE_WORDS_PATH";
pub const HOST_VAR: &str = "SCRABBLE_HOST";
pub const PORT_VAR: &str = "PORT";
pub const MAX_ANAGRAM_LEN_VAR: &str = "SCRABBLE_MAX_ANAGRAM_LEN";

/// A configuration value that could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub words_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub max_anagram_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            words_path: PathBuf::from("words.json"),
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_anagram_len: DEFAULT_MAX_LEN,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let words_path = lookup(WORDS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.words_path);
        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let max_anagram_len =
            parse_var(&lookup, MAX_ANAGRAM_LEN_VAR)?.unwrap_or(defaults.max_anagram_len);

        if max_anagram_len == 0 {
            return Err(ConfigError::Invalid {
                var: MAX_ANAGRAM_LEN_VAR,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ServerConfig {
            words_path,
            host,
            port,
            max_anagram_len,
        })
    }

    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
    }
}
