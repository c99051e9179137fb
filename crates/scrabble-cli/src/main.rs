//! Scrabble word tools CLI.
//!
//! Provides the `scrabble` binary for checking words and listing anagrams
//! against a dictionary file without running the HTTP server. Uses the same
//! `scrabble_core` normalization and lookup as the server endpoints, so
//! answers match between the two entry points.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use scrabble_core::{normalize, true_anagrams, AnagramIndex, Dictionary};

/// Scrabble dictionary tools.
#[derive(Parser)]
#[command(name = "scrabble", about = "Scrabble dictionary tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check whether words are valid.
    Check {
        /// Path to the dictionary JSON file.
        #[arg(short, long, default_value = "words.json")]
        words: PathBuf,

        /// Print results as JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,

        /// Words to check.
        #[arg(required = true)]
        input: Vec<String>,
    },

    /// List dictionary anagrams of a word.
    Anagrams {
        /// Path to the dictionary JSON file.
        #[arg(short, long, default_value = "words.json")]
        words: PathBuf,

        /// Include shorter sub-word matches and the word itself.
        #[arg(long)]
        all: bool,

        /// Longest word to search, in characters.
        #[arg(long, default_value_t = scrabble_core::DEFAULT_MAX_LEN)]
        max_len: usize,

        /// Word to rearrange.
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { words, json, input } => run_check(&words, json, &input),
        Commands::Anagrams {
            words,
            all,
            max_len,
            input,
        } => run_anagrams(&words, all, max_len, &input),
    };
    process::exit(exit_code);
}

/// Loads the dictionary or reports why it could not be loaded.
fn load_dictionary(path: &Path) -> Result<Dictionary, i32> {
    Dictionary::load(path).map_err(|e| {
        eprintln!("Error: {}", e);
        2
    })
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 = all words valid, 1 = at least one invalid,
/// 2 = dictionary could not be loaded.
fn run_check(words_path: &Path, json: bool, input: &[String]) -> i32 {
    let dictionary = match load_dictionary(words_path) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let results: Vec<(String, bool)> = input
        .iter()
        .map(|raw| {
            let word = normalize(raw);
            let valid = dictionary.contains(&word);
            (word, valid)
        })
        .collect();

    if json {
        let body: Vec<serde_json::Value> = results
            .iter()
            .map(|(word, valid)| serde_json::json!({ "word": word, "valid": valid }))
            .collect();
        println!("{}", serde_json::Value::Array(body));
    } else {
        for (word, valid) in &results {
            println!("{}\t{}", word, if *valid { "valid" } else { "invalid" });
        }
    }

    if results.iter().all(|(_, valid)| *valid) {
        0
    } else {
        1
    }
}

/// Execute the anagrams subcommand.
///
/// Returns exit code: 0 = success, 1 = word rejected, 2 = dictionary could
/// not be loaded.
fn run_anagrams(words_path: &Path, all: bool, max_len: usize, input: &str) -> i32 {
    let dictionary = match load_dictionary(words_path) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let index = AnagramIndex::build(&dictionary).with_max_len(max_len);

    let word = normalize(input);
    let candidates = match index.anagrams_of(&word) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let found = if all {
        candidates
    } else {
        true_anagrams(&word, candidates)
    };

    for anagram in &found {
        println!("{}", anagram);
    }
    0
}
