//! Word Descrambler
//!
//! Finds every dictionary word that can be spelled from a set of scrambled letters,
//! searching the dictionary on a pool of worker threads.
//!
//! # Quick Start
//!
//! ```rust
//! use word_descrambler::core::{Dictionary, SearchConfig};
//! use word_descrambler::search::Descrambler;
//!
//! let dictionary = Dictionary::from_words(["listen", "silent", "enlist", "tinsel", "lint"]);
//!
//! // Only words that use exactly the candidate letters
//! let config = SearchConfig {
//!     use_all_letters: true,
//!     ..SearchConfig::default()
//! };
//! let descrambler = Descrambler::new(&dictionary, config);
//!
//! let outcome = descrambler.descramble("tinsle").unwrap();
//! assert_eq!(outcome.matches.sorted(), vec!["enlist", "listen", "silent", "tinsel"]);
//! ```

// Core domain types
pub mod core;

// Matcher and concurrent search
pub mod search;

// Word lists
pub mod wordlists;

// Settings file
pub mod settings;

// Runtime reporting
pub mod runtime;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
