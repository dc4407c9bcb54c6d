//! Terminal output formatting
//!
//! Match listing layout and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_runtime, print_search_report};
pub use formatters::{ColumnLayout, DEFAULT_COLUMN_NUMBER, RenderOptions, render_matches};
