//! Search options and their validation
//!
//! `SearchConfig` is what callers build. It is checked against a `CandidateSet`
//! once, up front, producing a `ResolvedConfig` that the matcher and the
//! search coordinator read from.

use super::candidates::CandidateSet;
use super::error::DescrambleError;

/// Default minimum length of a matching word
pub const DEFAULT_MIN_MATCH_LENGTH: usize = 3;

/// Default number of search workers
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Options for a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Only accept words that use exactly the candidate alphabet
    pub use_all_letters: bool,
    /// Only consider words of exactly this length
    pub limit_length: Option<usize>,
    /// Words shorter than this never match
    pub min_match_length: usize,
    /// Number of dictionary chunks searched concurrently
    pub num_threads: usize,
    /// Log every match as it is found
    pub verbose_mode: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_all_letters: false,
            limit_length: None,
            min_match_length: DEFAULT_MIN_MATCH_LENGTH,
            num_threads: DEFAULT_NUM_THREADS,
            verbose_mode: false,
        }
    }
}

/// How a word is compared against the candidate letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every letter of the word is drawn from the candidates
    Subset,
    /// The word's distinct letters are exactly the candidates' distinct letters
    AllLetters,
}

/// A `SearchConfig` that has been validated against a set of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    mode: MatchMode,
    limit_length: Option<usize>,
    min_match_length: usize,
    num_threads: usize,
    verbose_mode: bool,
    candidate_length: usize,
}

impl SearchConfig {
    /// Validate this configuration against the candidates it will be used with
    ///
    /// `use_all_letters` takes priority over `limit_length`: a valid limit is
    /// cleared when all letters must be used.
    ///
    /// # Errors
    /// Returns `DescrambleError::Configuration` if:
    /// - `limit_length` is zero or longer than the candidates
    /// - `min_match_length` is longer than the candidates
    /// - `num_threads` is zero
    ///
    /// # Examples
    /// ```
    /// use word_descrambler::core::{CandidateSet, SearchConfig};
    ///
    /// let candidates = CandidateSet::new("cat").unwrap();
    /// let config = SearchConfig { limit_length: Some(10), ..SearchConfig::default() };
    /// assert!(config.resolve(&candidates).is_err());
    /// ```
    pub fn resolve(&self, candidates: &CandidateSet) -> Result<ResolvedConfig, DescrambleError> {
        let candidate_length = candidates.len();

        if let Some(limit) = self.limit_length {
            if limit == 0 {
                return Err(DescrambleError::configuration(
                    "limit length must be a positive number",
                ));
            }
            if limit > candidate_length {
                return Err(DescrambleError::configuration(format!(
                    "limit length ({limit}) cannot be larger than the number of candidate letters ({candidate_length})"
                )));
            }
        }

        if self.min_match_length > candidate_length {
            return Err(DescrambleError::configuration(format!(
                "min match length ({}) cannot be larger than the number of candidate letters ({candidate_length})",
                self.min_match_length
            )));
        }

        if self.num_threads == 0 {
            return Err(DescrambleError::configuration(
                "at least one search thread is required",
            ));
        }

        let (mode, limit_length) = if self.use_all_letters {
            (MatchMode::AllLetters, None)
        } else {
            (MatchMode::Subset, self.limit_length)
        };

        Ok(ResolvedConfig {
            mode,
            limit_length,
            min_match_length: self.min_match_length,
            num_threads: self.num_threads,
            verbose_mode: self.verbose_mode,
            candidate_length,
        })
    }
}

impl ResolvedConfig {
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Effective length limit (always `None` in all-letters mode)
    #[inline]
    #[must_use]
    pub const fn limit_length(&self) -> Option<usize> {
        self.limit_length
    }

    #[inline]
    #[must_use]
    pub const fn min_match_length(&self) -> usize {
        self.min_match_length
    }

    #[inline]
    #[must_use]
    pub const fn num_threads(&self) -> usize {
        self.num_threads
    }

    #[inline]
    #[must_use]
    pub const fn verbose_mode(&self) -> bool {
        self.verbose_mode
    }

    /// Exact word length the dictionary is narrowed to before searching, if any
    #[must_use]
    pub const fn target_length(&self) -> Option<usize> {
        match self.mode {
            MatchMode::AllLetters => Some(self.candidate_length),
            MatchMode::Subset => self.limit_length,
        }
    }
}
