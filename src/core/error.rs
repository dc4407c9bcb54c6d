//! Error type shared by the descrambling core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before or at the start of a search
///
/// Workers never produce errors: once a search has validated its
/// configuration it always runs to completion.
#[derive(Debug, Error)]
pub enum DescrambleError {
    /// Invalid combination of options
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// An explicitly requested word list does not exist
    #[error("Word list not found at {}", .0.display())]
    MissingResource(PathBuf),

    /// Too many candidate letters
    #[error("Too many candidate letters: got {len}, max supported is {max}")]
    CandidateLength { len: usize, max: usize },

    /// A word list exists but could not be read
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The per-search worker pool could not be created
    #[error("Failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl DescrambleError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
