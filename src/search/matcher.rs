//! Word matching policy
//!
//! Decides whether a single dictionary word can be built from the candidate letters.

use crate::core::{CandidateSet, MatchMode, ResolvedConfig};
use rustc_hash::FxHashSet;

/// Decide whether `word` matches the candidates under `config`
///
/// - Words shorter than the minimum match length never match.
/// - [`MatchMode::Subset`]: every letter of the word must be one of the
///   candidate letters. Letters may be reused any number of times.
/// - [`MatchMode::AllLetters`]: the word's distinct letters must be exactly the
///   candidates' distinct letters.
///
/// Letter counts are not compared in either mode, so with candidates `cat`
/// the word `catt` satisfies the all-letters test.
///
/// # Examples
/// ```
/// use word_descrambler::core::{CandidateSet, SearchConfig};
/// use word_descrambler::search::evaluate;
///
/// let candidates = CandidateSet::new("cat").unwrap();
/// let config = SearchConfig::default().resolve(&candidates).unwrap();
///
/// assert!(evaluate("act", &candidates, &config));
/// assert!(!evaluate("at", &candidates, &config)); // too short
/// assert!(!evaluate("cats", &candidates, &config)); // no 's'
/// ```
#[must_use]
pub fn evaluate(word: &str, candidates: &CandidateSet, config: &ResolvedConfig) -> bool {
    if word.chars().count() < config.min_match_length() {
        return false;
    }

    match config.mode() {
        MatchMode::AllLetters => distinct_letters(word) == *candidates.alphabet(),
        MatchMode::Subset => word.chars().all(|letter| candidates.contains(letter)),
    }
}

fn distinct_letters(word: &str) -> FxHashSet<char> {
    word.chars().collect()
}
