//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from embedded constants.

use crate::core::{DescrambleError, Dictionary};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a newline-delimited word list from a file
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `DescrambleError::MissingResource` if no file exists at `path`, or
/// `DescrambleError::Io` if it exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use word_descrambler::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/full.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DescrambleError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(DescrambleError::MissingResource(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| DescrambleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_words(content.lines());
    if dictionary.is_empty() {
        warn!(path = %path.display(), "word list contains no words");
    }

    Ok(dictionary)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use word_descrambler::wordlists::loader::words_from_slice;
/// use word_descrambler::wordlists::BASIC;
///
/// let dictionary = words_from_slice(BASIC);
/// assert_eq!(dictionary.len(), BASIC.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice)
}
