//! The in-memory storage layer.
//!
//! [`Library`] holds the two append-only record sequences and hands out
//! clones on read. It is the only shared mutable state in the process.

mod library;

pub use library::Library;
