use crate::core::{DEFAULT_MIN_MATCH_LENGTH, DEFAULT_NUM_THREADS, SearchConfig};
use crate::output::{ColumnLayout, DEFAULT_COLUMN_NUMBER, RenderOptions};
use crate::runtime::{RuntimeFormat, RuntimeReporter};
use crate::wordlists::DictionarySource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub wordlist: WordlistSettings,
    #[serde(default)]
    pub runtime: RuntimeSettings,
    #[serde(default)]
    pub runtime_output: RuntimeOutputSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Search options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub use_all_letters: bool,
    /// 0 means no limit
    #[serde(default)]
    pub limit_length: usize,
    #[serde(default = "default_min_match_length")]
    pub min_match_length: usize,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
    #[serde(default)]
    pub verbose_mode: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            use_all_letters: false,
            limit_length: 0,
            min_match_length: default_min_match_length(),
            num_threads: default_num_threads(),
            verbose_mode: false,
        }
    }
}

fn default_min_match_length() -> usize {
    DEFAULT_MIN_MATCH_LENGTH
}

fn default_num_threads() -> usize {
    DEFAULT_NUM_THREADS
}

/// Word list selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordlistSettings {
    /// Word list file; empty means use an embedded corpus
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default)]
    pub use_basic_wordlist: bool,
}

/// Runtime reporting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuntimeSettings {
    #[serde(default = "default_true")]
    pub use_timedelta: bool,
    #[serde(default = "default_save_file_path")]
    pub save_file_path: PathBuf,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            use_timedelta: true,
            save_file_path: default_save_file_path(),
        }
    }
}

fn default_save_file_path() -> PathBuf {
    PathBuf::from("./last_runtime.json")
}

/// Runtime record format
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuntimeOutputSettings {
    #[serde(default = "default_true")]
    pub as_json: bool,
    #[serde(default)]
    pub as_text: bool,
}

impl Default for RuntimeOutputSettings {
    fn default() -> Self {
        Self {
            as_json: true,
            as_text: false,
        }
    }
}

/// Match listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub print_matches: bool,
    #[serde(default = "default_true")]
    pub use_columns: bool,
    #[serde(default)]
    pub words_per_column: usize,
    #[serde(default = "default_column_number")]
    pub column_number: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            print_matches: true,
            use_columns: true,
            words_per_column: 0,
            column_number: default_column_number(),
        }
    }
}

fn default_column_number() -> usize {
    DEFAULT_COLUMN_NUMBER
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Search options, with a zero length limit meaning "no limit"
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            use_all_letters: self.search.use_all_letters,
            limit_length: (self.search.limit_length > 0).then_some(self.search.limit_length),
            min_match_length: self.search.min_match_length,
            num_threads: self.search.num_threads,
            verbose_mode: self.search.verbose_mode,
        }
    }

    #[must_use]
    pub fn dictionary_source(&self) -> DictionarySource {
        DictionarySource::resolve(
            Some(self.wordlist.path.as_path()),
            self.wordlist.use_basic_wordlist,
        )
    }

    #[must_use]
    pub const fn column_layout(&self) -> ColumnLayout {
        ColumnLayout {
            words_per_column: self.display.words_per_column,
            column_number: self.display.column_number,
        }
    }

    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            print_matches: self.display.print_matches,
            use_columns: self.display.use_columns,
            layout: self.column_layout(),
        }
    }

    /// JSON wins when both formats are enabled
    #[must_use]
    pub const fn runtime_format(&self) -> Option<RuntimeFormat> {
        if self.runtime_output.as_json {
            Some(RuntimeFormat::Json)
        } else if self.runtime_output.as_text {
            Some(RuntimeFormat::Text)
        } else {
            None
        }
    }

    #[must_use]
    pub fn runtime_reporter(&self) -> RuntimeReporter {
        RuntimeReporter {
            use_timedelta: self.runtime.use_timedelta,
            save_path: self.runtime.save_file_path.clone(),
            format: self.runtime_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_search_config() {
        let settings = Settings::default();
        assert_eq!(settings.search_config(), SearchConfig::default());
    }

    #[test]
    fn zero_limit_is_unset() {
        let mut settings = Settings::default();
        assert_eq!(settings.search_config().limit_length, None);

        settings.search.limit_length = 5;
        assert_eq!(settings.search_config().limit_length, Some(5));
    }

    #[test]
    fn default_source_is_full_corpus() {
        assert_eq!(Settings::default().dictionary_source(), DictionarySource::Full);
    }

    #[test]
    fn basic_flag_selects_basic_corpus() {
        let mut settings = Settings::default();
        settings.wordlist.use_basic_wordlist = true;
        assert_eq!(settings.dictionary_source(), DictionarySource::Basic);
    }

    #[test]
    fn default_layout() {
        assert_eq!(Settings::default().column_layout(), ColumnLayout::default());
        assert_eq!(Settings::default().render_options(), RenderOptions::default());
    }

    #[test]
    fn runtime_format_priority() {
        let mut settings = Settings::default();
        assert_eq!(settings.runtime_format(), Some(RuntimeFormat::Json));

        settings.runtime_output.as_text = true;
        assert_eq!(settings.runtime_format(), Some(RuntimeFormat::Json));

        settings.runtime_output.as_json = false;
        assert_eq!(settings.runtime_format(), Some(RuntimeFormat::Text));

        settings.runtime_output.as_text = false;
        assert_eq!(settings.runtime_format(), None);
    }
}
