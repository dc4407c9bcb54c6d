//! Core domain types for descrambling
//!
//! Candidate letters, the dictionary, search options and the shared error type.
//! Nothing in here touches the filesystem or spawns threads.

mod candidates;
mod config;
mod dictionary;
mod error;

pub use candidates::{CandidateSet, MAX_CANDIDATE_LENGTH};
pub use config::{
    DEFAULT_MIN_MATCH_LENGTH, DEFAULT_NUM_THREADS, MatchMode, ResolvedConfig, SearchConfig,
};
pub use dictionary::Dictionary;
pub use error::DescrambleError;
