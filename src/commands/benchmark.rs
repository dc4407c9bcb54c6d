//! Benchmark command
//!
//! Scrambles random dictionary words and checks that descrambling recovers them.

use crate::core::{DescrambleError, MAX_CANDIDATE_LENGTH, SearchConfig};
use crate::search::Descrambler;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_searches: usize,
    /// Searches whose scrambled source word was among the matches
    pub recovered: usize,
    pub total_matches: usize,
    pub total_guesses: usize,
    pub average_matches: f64,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run `count` all-letters searches on scrambled dictionary words
///
/// Source words are drawn from the descrambler's dictionary and must be at
/// least as long as the configured minimum match length. The descrambler's
/// other options (thread count, minimum length) are kept.
///
/// # Errors
///
/// Returns `DescrambleError::Configuration` if no dictionary word is long
/// enough to benchmark with, or any error a search can return.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark<R: Rng + ?Sized>(
    descrambler: &Descrambler,
    count: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, DescrambleError> {
    let min_length = descrambler.config().min_match_length.max(1);
    let pool: Vec<&str> = descrambler
        .dictionary()
        .words()
        .iter()
        .map(String::as_str)
        .filter(|word| (min_length..=MAX_CANDIDATE_LENGTH).contains(&word.chars().count()))
        .collect();

    if pool.is_empty() {
        return Err(DescrambleError::configuration(format!(
            "no dictionary words with at least {min_length} letters to benchmark with"
        )));
    }

    let descrambler = descrambler.with_config(SearchConfig {
        use_all_letters: true,
        limit_length: None,
        ..*descrambler.config()
    });

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut recovered = 0;
    let mut total_matches = 0;
    let mut total_guesses = 0;

    for _ in 0..count {
        let Some(&word) = pool.choose(rng) else {
            break;
        };

        let mut letters: Vec<char> = word.chars().collect();
        letters.shuffle(rng);
        let scrambled: String = letters.into_iter().collect();

        let outcome = descrambler.descramble(&scrambled)?;
        if outcome.matches.contains(word) {
            recovered += 1;
        }
        total_matches += outcome.matches.len();
        total_guesses += outcome.guesses;

        pb.set_message(scrambled);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let seconds = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_searches: count,
        recovered,
        total_matches,
        total_guesses,
        average_matches: if count > 0 {
            total_matches as f64 / count as f64
        } else {
            0.0
        },
        duration,
        searches_per_second: if seconds > 0.0 {
            count as f64 / seconds
        } else {
            0.0
        },
    })
}
