//! Word Descrambler - CLI
//!
//! Finds every dictionary word that can be spelled from a set of scrambled letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_descrambler::{
    commands::{SearchRequest, run_benchmark, run_interactive, run_search},
    output::{print_benchmark_result, print_runtime, print_search_report},
    runtime::Runtime,
    search::Descrambler,
    settings::{Settings, load_settings, validate_settings},
};

#[derive(Parser)]
#[command(
    name = "word_descrambler",
    about = "Find every dictionary word that can be spelled from a set of scrambled letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: ./descrambler.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: embedded full corpus)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Use the embedded basic English corpus
    #[arg(long, global = true)]
    basic: bool,

    /// Only match words that use exactly the candidate letters
    #[arg(short = 'a', long, global = true)]
    all_letters: bool,

    /// Only match words of exactly this length
    #[arg(short = 'l', long, global = true)]
    limit_length: Option<usize>,

    /// Shortest word to match
    #[arg(short = 'm', long, global = true)]
    min_length: Option<usize>,

    /// Number of search workers
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Log every match with its guess number
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Print one match per line
    #[arg(long, global = true)]
    no_columns: bool,

    /// Size rows so that each column holds about this many words
    #[arg(long, global = true)]
    words_per_column: Option<usize>,

    /// Fixed number of words per row
    #[arg(long, global = true)]
    column_number: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Descramble one set of letters
    Search {
        /// The candidate letters
        letters: String,
    },

    /// Prompt for letters repeatedly (default)
    Interactive,

    /// Scramble random dictionary words and time how fast they are recovered
    Benchmark {
        /// Number of searches to run
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Cli {
    /// Apply command line overrides on top of the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.wordlist {
            settings.wordlist.path.clone_from(path);
        }
        if self.basic {
            settings.wordlist.use_basic_wordlist = true;
        }

        let search = &mut settings.search;
        if self.all_letters {
            search.use_all_letters = true;
        }
        if let Some(limit) = self.limit_length {
            search.limit_length = limit;
        }
        if let Some(min) = self.min_length {
            search.min_match_length = min;
        }
        if let Some(threads) = self.threads {
            search.num_threads = threads;
        }
        if self.verbose {
            search.verbose_mode = true;
        }

        let display = &mut settings.display;
        if self.no_columns {
            display.use_columns = false;
        }
        // Giving one layout option replaces the other; giving both is rejected by validation
        match (self.words_per_column, self.column_number) {
            (Some(words), None) => {
                display.words_per_column = words;
                display.column_number = 0;
            }
            (None, Some(columns)) => {
                display.words_per_column = 0;
                display.column_number = columns;
            }
            (Some(words), Some(columns)) => {
                display.words_per_column = words;
                display.column_number = columns;
            }
            (None, None) => {}
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply(&mut settings);
    validate_settings(&settings).context("Settings validation failed")?;

    init_logging(settings.search.verbose_mode);

    let source = settings.dictionary_source();
    let dictionary = source
        .load()
        .with_context(|| format!("Failed to load word list from {source}"))?;
    let descrambler = Descrambler::new(&dictionary, settings.search_config());

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Search { letters } => run_search_command(&letters, &descrambler, &settings),
        Commands::Interactive => run_interactive_command(&descrambler, &settings),
        Commands::Benchmark { count } => run_benchmark_command(count, &descrambler),
    }
}

fn run_search_command(letters: &str, descrambler: &Descrambler, settings: &Settings) -> Result<()> {
    let runtime = Runtime::start();

    let request = SearchRequest::new(letters).with_render(settings.render_options());
    let report = run_search(request, descrambler)
        .with_context(|| format!("Failed to descramble '{letters}'"))?;
    print_search_report(&report);

    let reporter = settings.runtime_reporter();
    let record = reporter
        .finish(&runtime)
        .context("Failed to save runtime record")?;
    print_runtime(&record.runtime_string(reporter.use_timedelta));

    Ok(())
}

fn run_interactive_command(descrambler: &Descrambler, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let searches = run_interactive(
        descrambler,
        settings.render_options(),
        &settings.runtime_reporter(),
        stdin.lock(),
        &mut stdout,
    )
    .context("Interactive session failed")?;

    info!(searches, "interactive session ended");
    Ok(())
}

fn run_benchmark_command(count: usize, descrambler: &Descrambler) -> Result<()> {
    println!("Running benchmark on {count} scrambled words...");

    let result = run_benchmark(descrambler, count, &mut rand::rng()).context("Benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_descrambler::settings::load_settings_from_str;
    use word_descrambler::wordlists::DictionarySource;

    fn apply(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        settings
    }

    #[test]
    fn no_flags_keep_settings() {
        let settings = apply(&["word_descrambler"]);
        assert_eq!(settings, Settings::default());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn words_per_column_clears_column_number() {
        let settings = apply(&["word_descrambler", "--words-per-column", "4", "search", "cat"]);

        assert_eq!(settings.display.words_per_column, 4);
        assert_eq!(settings.display.column_number, 0);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn column_number_clears_words_per_column() {
        let mut settings = Settings::default();
        settings.display.words_per_column = 6;
        settings.display.column_number = 0;

        let cli = Cli::try_parse_from(["word_descrambler", "--column-number", "5"]).unwrap();
        cli.apply(&mut settings);

        assert_eq!(settings.display.words_per_column, 0);
        assert_eq!(settings.display.column_number, 5);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn both_layout_options_rejected() {
        let settings = apply(&[
            "word_descrambler",
            "--words-per-column",
            "4",
            "--column-number",
            "2",
        ]);

        assert_eq!(settings.display.words_per_column, 4);
        assert_eq!(settings.display.column_number, 2);
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn zero_limit_means_unset() {
        let settings = apply(&["word_descrambler", "-l", "0"]);
        assert_eq!(settings.search_config().limit_length, None);

        let settings = apply(&["word_descrambler", "-l", "5"]);
        assert_eq!(settings.search_config().limit_length, Some(5));
    }

    #[test]
    fn flags_override_settings_file() {
        let mut settings = load_settings_from_str(
            r"
[search]
min_match_length = 5
num_threads = 2

[wordlist]
use_basic_wordlist = false

[display]
use_columns = true
",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "word_descrambler",
            "-m",
            "4",
            "-t",
            "8",
            "-a",
            "-v",
            "--basic",
            "--no-columns",
            "-w",
            "words.txt",
            "benchmark",
            "-n",
            "3",
        ])
        .unwrap();
        cli.apply(&mut settings);

        let config = settings.search_config();
        assert_eq!(config.min_match_length, 4);
        assert_eq!(config.num_threads, 8);
        assert!(config.use_all_letters);
        assert!(config.verbose_mode);
        assert!(!settings.display.use_columns);
        assert!(settings.wordlist.use_basic_wordlist);
        assert_eq!(
            settings.dictionary_source(),
            DictionarySource::File(PathBuf::from("words.txt"))
        );
        assert!(matches!(cli.command, Some(Commands::Benchmark { count: 3 })));
    }

    #[test]
    fn zero_threads_rejected() {
        let settings = apply(&["word_descrambler", "-t", "0"]);
        assert!(validate_settings(&settings).is_err());
    }
}
