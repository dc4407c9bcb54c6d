//! Descrambling search
//!
//! The matcher decides single words; the engine runs it over a partitioned dictionary.

mod engine;
mod match_set;
mod matcher;
mod partition;

pub use engine::{Descrambler, SearchOutcome, search};
pub use match_set::MatchSet;
pub use matcher::evaluate;
pub use partition::{chunk_bounds, partition};
