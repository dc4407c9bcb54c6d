//! Candidate letter representation
//!
//! A `CandidateSet` stores the letters a player has to work with, in the order given,
//! along with the set of distinct letters used by the matcher.

use super::error::DescrambleError;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Maximum number of candidate letters accepted for a single search
pub const MAX_CANDIDATE_LENGTH: usize = 5000;

/// Lowercased candidate letters with duplicate letters preserved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    letters: Vec<char>,
    alphabet: FxHashSet<char>,
}

impl CandidateSet {
    /// Create a candidate set from raw input
    ///
    /// Each character is lowercased on its own, keeping only the first character
    /// of its lowercase form, so the set holds exactly as many letters as were
    /// typed. Every character is kept, including repeats.
    ///
    /// # Errors
    /// Returns `DescrambleError::CandidateLength` if the input holds more than
    /// [`MAX_CANDIDATE_LENGTH`] characters.
    ///
    /// # Examples
    /// ```
    /// use word_descrambler::core::CandidateSet;
    ///
    /// let candidates = CandidateSet::new("Tact").unwrap();
    /// assert_eq!(candidates.len(), 4);
    /// assert_eq!(candidates.unique_count(), 3);
    /// assert!(candidates.contains('t'));
    /// ```
    pub fn new(letters: &str) -> Result<Self, DescrambleError> {
        let letters: Vec<char> = letters
            .chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect();

        if letters.len() > MAX_CANDIDATE_LENGTH {
            return Err(DescrambleError::CandidateLength {
                len: letters.len(),
                max: MAX_CANDIDATE_LENGTH,
            });
        }

        let alphabet = letters.iter().copied().collect();

        Ok(Self { letters, alphabet })
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in input order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Distinct letters
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &FxHashSet<char> {
        &self.alphabet
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Check if a letter is available
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.alphabet.contains(&letter)
    }
}

impl FromStr for CandidateSet {
    type Err = DescrambleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
