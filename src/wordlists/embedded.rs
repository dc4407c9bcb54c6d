//! Embedded word lists
//!
//! Word corpora compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/basic.rs"));
include!(concat!(env!("OUT_DIR"), "/full.rs"));
