//! Formatting utilities for match listings

use crate::core::DescrambleError;
use crate::search::MatchSet;
use std::fmt::Write;

/// Default number of words per printed row
pub const DEFAULT_COLUMN_NUMBER: usize = 3;

/// How matches are laid out when printed in columns
///
/// Zero means "not set" for both fields. At most one may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Derive the row width from the number of matches
    pub words_per_column: usize,
    /// Fixed number of words per row
    pub column_number: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            words_per_column: 0,
            column_number: DEFAULT_COLUMN_NUMBER,
        }
    }
}

impl ColumnLayout {
    /// Check that the layout can be rendered
    ///
    /// # Errors
    /// Returns `DescrambleError::Configuration` if both fields are set, or neither is.
    pub fn validate(&self) -> Result<(), DescrambleError> {
        if self.words_per_column >= 1 && self.column_number != 0 {
            return Err(DescrambleError::configuration(
                "words_per_column and column_number cannot be used at the same time",
            ));
        }
        if self.words_per_column == 0 && self.column_number == 0 {
            return Err(DescrambleError::configuration(
                "one of words_per_column or column_number must be set to use columns",
            ));
        }
        Ok(())
    }

    /// Number of words printed on each row for `match_count` matches
    ///
    /// With `words_per_column` set this is `max(1, match_count / words_per_column)`.
    ///
    /// # Errors
    /// See [`ColumnLayout::validate`].
    ///
    /// # Examples
    /// ```
    /// use word_descrambler::output::ColumnLayout;
    ///
    /// let layout = ColumnLayout { words_per_column: 4, column_number: 0 };
    /// assert_eq!(layout.column_number(10).unwrap(), 2);
    /// assert_eq!(layout.column_number(3).unwrap(), 1);
    /// ```
    pub fn column_number(&self, match_count: usize) -> Result<usize, DescrambleError> {
        self.validate()?;

        if self.words_per_column >= 1 {
            Ok((match_count / self.words_per_column).max(1))
        } else {
            Ok(self.column_number)
        }
    }
}

/// Presentation options for a match listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub print_matches: bool,
    pub use_columns: bool,
    pub layout: ColumnLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            print_matches: true,
            use_columns: true,
            layout: ColumnLayout::default(),
        }
    }
}

impl RenderOptions {
    /// # Errors
    /// Returns `DescrambleError::Configuration` if columns are enabled with an invalid layout.
    pub fn validate(&self) -> Result<(), DescrambleError> {
        if self.use_columns {
            self.layout.validate()?;
        }
        Ok(())
    }
}

/// Render matches as tab-indented text
///
/// Flat listings print one word per line. Column listings sort the words and
/// print them in rows joined by `", "`.
///
/// # Errors
/// Returns `DescrambleError::Configuration` if columns are requested with an
/// invalid layout.
///
/// # Examples
/// ```
/// use word_descrambler::output::{ColumnLayout, render_matches};
/// use word_descrambler::search::MatchSet;
///
/// let matches: MatchSet = ["tac", "act", "cat"].into_iter().collect();
/// let layout = ColumnLayout { words_per_column: 0, column_number: 2 };
///
/// let text = render_matches(&matches, true, &layout).unwrap();
/// assert_eq!(text, "\tact, cat\n\ttac\n");
/// ```
pub fn render_matches(
    matches: &MatchSet,
    use_columns: bool,
    layout: &ColumnLayout,
) -> Result<String, DescrambleError> {
    let mut rendered = String::new();
    let words = matches.sorted();

    if use_columns {
        let column_number = layout.column_number(matches.len())?;
        for row in words.chunks(column_number) {
            // Writing to a String cannot fail
            let _ = writeln!(rendered, "\t{}", row.join(", "));
        }
    } else {
        for word in words {
            let _ = writeln!(rendered, "\t{word}");
        }
    }

    Ok(rendered)
}

/// Format a count with comma thousands separators
///
/// # Examples
/// ```
/// use word_descrambler::output::formatters::with_thousands;
///
/// assert_eq!(with_thousands(1234567), "1,234,567");
/// assert_eq!(with_thousands(42), "42");
/// ```
#[must_use]
pub fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }

    result
}
