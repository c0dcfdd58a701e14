use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Error, SimpleObject};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::storage::Library;

// Author and Book reference each other; splitting the stored fields
// (SimpleObject) from the relation fields (ComplexObject) lets each type be
// declared without the other's resolvers.

/// Represents an author of a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = ctx.data::<Arc<Library>>()?;
        Ok(library
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(author: ModelAuthor) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

/// Represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author of this book
    ///
    /// Declared non-null, so a dangling `authorId` surfaces as a
    /// field-resolution error rather than a null value.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Author> {
        let library = ctx.data::<Arc<Library>>()?;
        library
            .author(self.author_id)
            .map(Into::into)
            .ok_or_else(|| Error::new(format!("no author with id {}", self.author_id)))
    }
}

impl From<ModelBook> for Book {
    fn from(book: ModelBook) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
        }
    }
}
