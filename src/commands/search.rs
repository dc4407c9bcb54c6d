//! Single search command
//!
//! Descrambles one set of candidate letters and renders the matches.

use crate::core::DescrambleError;
use crate::output::{RenderOptions, render_matches};
use crate::search::{Descrambler, SearchOutcome};

/// A request to descramble one set of letters
pub struct SearchRequest {
    pub letters: String,
    pub render: RenderOptions,
}

impl SearchRequest {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            render: RenderOptions::default(),
        }
    }

    #[must_use]
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Result of a search request
pub struct SearchReport {
    pub letters: String,
    pub outcome: SearchOutcome,
    /// Rendered listing, or `None` when printing matches is turned off
    pub rendered: Option<String>,
}

/// Run a search request
///
/// Presentation options are checked before the search starts so that a bad
/// layout never costs a full dictionary scan.
///
/// # Errors
///
/// Returns an error if:
/// - The render options are invalid
/// - The candidate letters are too long
/// - The search configuration does not fit the candidate letters
pub fn run_search(
    request: SearchRequest,
    descrambler: &Descrambler,
) -> Result<SearchReport, DescrambleError> {
    request.render.validate()?;

    let outcome = descrambler.descramble(&request.letters)?;

    let rendered = if request.render.print_matches {
        Some(render_matches(
            &outcome.matches,
            request.render.use_columns,
            &request.render.layout,
        )?)
    } else {
        None
    };

    Ok(SearchReport {
        letters: request.letters,
        outcome,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, SearchConfig};
    use crate::output::ColumnLayout;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "act", "at", "cats", "tact"])
    }

    #[test]
    fn search_renders_matches() {
        let dictionary = dictionary();
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());

        let report = run_search(SearchRequest::new("cat"), &descrambler).unwrap();

        assert_eq!(report.letters, "cat");
        assert_eq!(report.outcome.matches.sorted(), vec!["act", "cat", "tact"]);
        assert_eq!(report.rendered.as_deref(), Some("\tact, cat, tact\n"));
    }

    #[test]
    fn print_matches_off_skips_rendering() {
        let dictionary = dictionary();
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());
        let render = RenderOptions {
            print_matches: false,
            ..RenderOptions::default()
        };

        let report = run_search(SearchRequest::new("cat").with_render(render), &descrambler).unwrap();

        assert!(report.rendered.is_none());
        assert_eq!(report.outcome.matches.len(), 3);
    }

    #[test]
    fn invalid_layout_fails_before_search() {
        let dictionary = dictionary();
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());
        let render = RenderOptions {
            layout: ColumnLayout {
                words_per_column: 2,
                column_number: 3,
            },
            ..RenderOptions::default()
        };

        let result = run_search(SearchRequest::new("cat").with_render(render), &descrambler);
        assert!(matches!(result, Err(DescrambleError::Configuration(_))));
    }

    #[test]
    fn invalid_config_is_reported() {
        let dictionary = dictionary();
        let config = SearchConfig {
            limit_length: Some(10),
            ..SearchConfig::default()
        };
        let descrambler = Descrambler::new(&dictionary, config);

        assert!(run_search(SearchRequest::new("cat"), &descrambler).is_err());
    }
}
