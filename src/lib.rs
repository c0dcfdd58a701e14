//! # Bookshelf - a demo GraphQL endpoint
//!
//! Bookshelf serves a small in-memory library of authors and books over
//! GraphQL. Everything lives in process memory: the store is seeded at
//! startup, grows append-only, and is gone on exit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (port also via the PORT env var, default 5000)
//! bookshelf serve --port 5000
//!
//! # Query from the command line
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # Add a record
//! bookshelf query 'mutation { addAuthor(name: "Brandon Sanderson") { id } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: The shared in-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines the `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
pub mod graphql;

/// Data models for the library records.
pub mod model;

/// The shared in-memory record store.
pub mod storage;

pub mod logging;
