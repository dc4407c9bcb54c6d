//! Concurrent search coordinator
//!
//! Narrows the dictionary, splits it into one contiguous chunk per worker and runs the
//! matcher over every chunk on a thread pool built for the call.

use super::match_set::MatchSet;
use super::matcher::evaluate;
use super::partition::partition;
use crate::core::{CandidateSet, DescrambleError, Dictionary, ResolvedConfig, SearchConfig};
use rayon::ThreadPoolBuilder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a completed search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Every word that matched
    pub matches: MatchSet,
    /// Number of words evaluated
    pub guesses: usize,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

/// Search `dictionary` for words that can be built from `candidates`
///
/// The configuration is validated before any work starts. The dictionary is then
/// narrowed to the words worth evaluating, split into `num_threads` contiguous chunks,
/// and each chunk is searched by its own worker. Only the insert into the shared
/// match set is done under a lock.
///
/// # Errors
/// Returns `DescrambleError::Configuration` for invalid options, or
/// `DescrambleError::ThreadPool` if the worker pool cannot be started.
///
/// # Examples
/// ```
/// use word_descrambler::core::{CandidateSet, Dictionary, SearchConfig};
/// use word_descrambler::search::search;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "at", "cats"]);
/// let candidates = CandidateSet::new("cat").unwrap();
///
/// let outcome = search(&dictionary, &candidates, &SearchConfig::default()).unwrap();
/// assert_eq!(outcome.matches.sorted(), vec!["act", "cat"]);
/// assert_eq!(outcome.guesses, 4);
/// ```
pub fn search(
    dictionary: &Dictionary,
    candidates: &CandidateSet,
    config: &SearchConfig,
) -> Result<SearchOutcome, DescrambleError> {
    let start = Instant::now();
    let resolved = config.resolve(candidates)?;
    let working = working_words(dictionary, &resolved);

    info!(
        candidates = %candidates,
        words = working.len(),
        threads = resolved.num_threads(),
        mode = ?resolved.mode(),
        "starting search"
    );

    let matches = Mutex::new(MatchSet::new());
    let guesses = AtomicUsize::new(0);

    if !working.is_empty() {
        let pool = ThreadPoolBuilder::new()
            .num_threads(resolved.num_threads())
            .thread_name(|i| format!("descramble-{i}"))
            .build()?;

        pool.scope(|scope| {
            for chunk in partition(&working, resolved.num_threads()) {
                let (matches, guesses, resolved) = (&matches, &guesses, &resolved);
                scope.spawn(move |_| search_chunk(chunk, candidates, resolved, matches, guesses));
            }
        });
    }

    let outcome = SearchOutcome {
        matches: matches.into_inner().unwrap_or_else(PoisonError::into_inner),
        guesses: guesses.into_inner(),
        elapsed: start.elapsed(),
    };

    info!(
        matches = outcome.matches.len(),
        guesses = outcome.guesses,
        elapsed_ms = outcome.elapsed.as_millis(),
        "search complete"
    );

    Ok(outcome)
}

/// Words the workers will evaluate
///
/// All-letters mode keeps words as long as the candidates, a length limit keeps
/// words of exactly that length, otherwise every word is kept.
fn working_words<'d>(dictionary: &'d Dictionary, config: &ResolvedConfig) -> Vec<&'d str> {
    match config.target_length() {
        Some(length) => dictionary.words_of_length(length).collect(),
        None => dictionary.words().iter().map(String::as_str).collect(),
    }
}

fn search_chunk(
    chunk: &[&str],
    candidates: &CandidateSet,
    config: &ResolvedConfig,
    matches: &Mutex<MatchSet>,
    guesses: &AtomicUsize,
) {
    for &word in chunk {
        let guess_number = guesses.fetch_add(1, Ordering::Relaxed) + 1;

        if evaluate(word, candidates, config) {
            let owned = word.to_owned();
            matches
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(owned);

            if config.verbose_mode() {
                debug!(word, guess = guess_number, "found a match");
            }
        }
    }
}

/// A dictionary paired with search options
///
/// Front-ends hold one of these and hand it candidate letters; the dictionary is
/// loaded once and shared across searches.
pub struct Descrambler<'a> {
    dictionary: &'a Dictionary,
    config: SearchConfig,
}

impl<'a> Descrambler<'a> {
    /// Create a new descrambler over `dictionary`
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SearchConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Same dictionary, different options
    #[must_use]
    pub const fn with_config(&self, config: SearchConfig) -> Self {
        Self {
            dictionary: self.dictionary,
            config,
        }
    }

    /// Parse `letters` and search the dictionary with them
    ///
    /// # Errors
    /// Returns `DescrambleError::CandidateLength` for oversized input, or any
    /// error [`search`] can return.
    pub fn descramble(&self, letters: &str) -> Result<SearchOutcome, DescrambleError> {
        let candidates = CandidateSet::new(letters)?;
        self.search(&candidates)
    }

    /// Search the dictionary with already parsed candidates
    ///
    /// # Errors
    /// See [`search`].
    pub fn search(&self, candidates: &CandidateSet) -> Result<SearchOutcome, DescrambleError> {
        search(self.dictionary, candidates, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str], letters: &str, config: SearchConfig) -> SearchOutcome {
        let dictionary = Dictionary::from_words(words);
        let candidates = CandidateSet::new(letters).unwrap();
        search(&dictionary, &candidates, &config).unwrap()
    }

    #[test]
    fn subset_scenario() {
        let outcome = run(&["cat", "act", "at", "cats"], "cat", SearchConfig::default());

        assert_eq!(outcome.matches.sorted(), vec!["act", "cat"]);
        assert_eq!(outcome.guesses, 4);
    }

    #[test]
    fn all_letters_scenario() {
        let config = SearchConfig {
            use_all_letters: true,
            ..SearchConfig::default()
        };
        let outcome = run(&["cat", "act", "tac", "at"], "cat", config);

        assert_eq!(outcome.matches.sorted(), vec!["act", "cat", "tac"]);
        // "at" is filtered out before any worker sees it
        assert_eq!(outcome.guesses, 3);
    }

    #[test]
    fn empty_dictionary_any_thread_count() {
        for num_threads in [1, 2, 4, 16] {
            let config = SearchConfig {
                num_threads,
                ..SearchConfig::default()
            };
            let outcome = run(&[], "cat", config);

            assert!(outcome.matches.is_empty());
            assert_eq!(outcome.guesses, 0);
        }
    }

    #[test]
    fn invalid_limit_fails_before_searching() {
        let dictionary = Dictionary::from_words(["cat"]);
        let candidates = CandidateSet::new("cat").unwrap();
        let config = SearchConfig {
            limit_length: Some(10),
            ..SearchConfig::default()
        };

        let result = search(&dictionary, &candidates, &config);
        assert!(matches!(result, Err(DescrambleError::Configuration(_))));
    }

    #[test]
    fn limit_length_filters_to_exact_length() {
        let config = SearchConfig {
            limit_length: Some(4),
            ..SearchConfig::default()
        };
        let outcome = run(&["rat", "star", "tsar", "stare", "arts"], "stare", config);

        assert_eq!(outcome.matches.sorted(), vec!["arts", "star", "tsar"]);
        assert_eq!(outcome.guesses, 3);
    }

    #[test]
    fn limit_equal_to_candidate_length_matches_exact_length_words() {
        let words = ["cat", "act", "tact", "ta", "taco"];
        let limited = run(
            &words,
            "cat",
            SearchConfig {
                limit_length: Some(3),
                ..SearchConfig::default()
            },
        );
        let unlimited = run(&words, "cat", SearchConfig::default());

        let exact: MatchSet = unlimited
            .matches
            .iter()
            .filter(|word| word.chars().count() == 3)
            .collect();
        assert_eq!(limited.matches, exact);
    }

    #[test]
    fn guesses_equal_working_set_size() {
        let words: Vec<String> = (0..1000).map(|i| format!("w{i}")).collect();
        let dictionary = Dictionary::from_words(&words);
        let candidates = CandidateSet::new("abc").unwrap();

        for num_threads in [1, 3, 7, 64, 2000] {
            let config = SearchConfig {
                num_threads,
                ..SearchConfig::default()
            };
            let outcome = search(&dictionary, &candidates, &config).unwrap();
            assert_eq!(outcome.guesses, 1000, "threads={num_threads}");
        }
    }

    #[test]
    fn thread_count_does_not_change_matches() {
        let words = [
            "stare", "tears", "rates", "aster", "star", "rats", "art", "tar", "eat", "tea",
            "east", "seat", "stone", "notes", "zebra",
        ];
        let baseline = run(&words, "stare", SearchConfig::default());

        for num_threads in [1, 2, 5, 15, 40] {
            let outcome = run(
                &words,
                "stare",
                SearchConfig {
                    num_threads,
                    ..SearchConfig::default()
                },
            );
            assert_eq!(outcome.matches, baseline.matches, "threads={num_threads}");
        }
    }

    #[test]
    fn verbose_mode_does_not_change_results() {
        let words = ["stare", "tears", "rates", "aster", "star", "rats", "zebra"];
        let quiet = run(&words, "stare", SearchConfig::default());

        for num_threads in [1, 3, 8] {
            let verbose = run(
                &words,
                "stare",
                SearchConfig {
                    verbose_mode: true,
                    num_threads,
                    ..SearchConfig::default()
                },
            );
            assert_eq!(verbose.matches, quiet.matches, "threads={num_threads}");
            assert_eq!(verbose.guesses, quiet.guesses);
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let dictionary = Dictionary::from_words(["listen", "silent", "enlist", "tinsel", "inlet"]);
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());

        let first = descrambler.descramble("listen").unwrap();
        let second = descrambler.descramble("listen").unwrap();

        assert_eq!(first.matches, second.matches);
        assert_eq!(first.matches.len(), 5);
    }

    #[test]
    fn descrambler_rejects_oversized_candidates() {
        let dictionary = Dictionary::from_words(["cat"]);
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());

        let letters = "a".repeat(crate::core::MAX_CANDIDATE_LENGTH + 1);
        assert!(matches!(
            descrambler.descramble(&letters),
            Err(DescrambleError::CandidateLength { .. })
        ));
    }

    #[test]
    fn with_config_keeps_dictionary() {
        let dictionary = Dictionary::from_words(["cat", "act", "catt"]);
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());
        let strict = descrambler.with_config(SearchConfig {
            use_all_letters: true,
            ..SearchConfig::default()
        });

        assert_eq!(strict.dictionary().len(), 3);
        assert!(strict.config().use_all_letters);
        assert_eq!(strict.descramble("cat").unwrap().matches.len(), 2);
    }
}
