//! Dictionary source selection
//!
//! A search reads from exactly one source: an explicit file, or one of the
//! embedded corpora.

use super::loader::{load_from_file, words_from_slice};
use super::{BASIC, FULL};
use crate::core::{DescrambleError, Dictionary};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Newline-delimited word list on disk
    File(PathBuf),
    /// Embedded basic English corpus
    Basic,
    /// Embedded full corpus
    Full,
}

impl DictionarySource {
    /// Pick a source
    ///
    /// A non-empty `path` always wins; otherwise `use_basic` chooses between the
    /// embedded corpora.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use word_descrambler::wordlists::DictionarySource;
    ///
    /// assert_eq!(DictionarySource::resolve(None, true), DictionarySource::Basic);
    /// assert_eq!(DictionarySource::resolve(Some(Path::new("")), false), DictionarySource::Full);
    /// assert!(matches!(
    ///     DictionarySource::resolve(Some(Path::new("words.txt")), true),
    ///     DictionarySource::File(_)
    /// ));
    /// ```
    #[must_use]
    pub fn resolve(path: Option<&Path>, use_basic: bool) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path.to_path_buf()),
            _ if use_basic => Self::Basic,
            _ => Self::Full,
        }
    }

    /// Load the dictionary
    ///
    /// # Errors
    /// Returns `DescrambleError::MissingResource` if a file source does not exist,
    /// or `DescrambleError::Io` if it cannot be read.
    pub fn load(&self) -> Result<Dictionary, DescrambleError> {
        let dictionary = match self {
            Self::File(path) => load_from_file(path)?,
            Self::Basic => words_from_slice(BASIC),
            Self::Full => words_from_slice(FULL),
        };

        info!(source = %self, words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Basic => write!(f, "basic corpus"),
            Self::Full => write!(f, "full corpus"),
        }
    }
}
