//! Word lists for descrambling
//!
//! Provides embedded corpora compiled into the binary and loaders for word list files.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{BASIC, BASIC_COUNT, FULL, FULL_COUNT};
pub use source::DictionarySource;
