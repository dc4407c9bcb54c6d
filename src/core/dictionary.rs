//! Dictionary representation
//!
//! Words are normalized (trimmed, lowercased), deduplicated and kept in sorted
//! order so that the same input always partitions the same way.

use std::collections::BTreeSet;

/// A read-only set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_descrambler::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Cat", " act ", "", "cat"]);
    /// assert_eq!(dictionary.words(), &["act", "cat"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// Words with exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.chars().count() == length)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
