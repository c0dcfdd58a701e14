//! Data models for the bookshelf.
//!
//! This module defines the two record types:
//!
//! - [`Author`]: a writer, referenced by books
//! - [`Book`]: a book carrying an `author_id` foreign key

mod author;
mod book;

pub use author::Author;
pub use book::Book;
