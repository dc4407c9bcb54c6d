//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod search;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use interactive::run_interactive;
pub use search::{SearchReport, SearchRequest, run_search};
