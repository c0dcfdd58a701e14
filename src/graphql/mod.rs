//! GraphQL schema and resolvers for the bookshelf.
//!
//! Exposes the in-memory library over a single `/graphql` route, with an
//! interactive GraphiQL console for plain GET requests.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { id name } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf query 'mutation { addAuthor(name: "Ursula K. Le Guin") { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::run_server;
pub use types::{Author, Book};
