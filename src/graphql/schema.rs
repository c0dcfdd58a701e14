use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use tracing::info;

use crate::storage::Library;

use super::types::{Author, Book};

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

fn library<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Arc<Library>> {
    ctx.data::<Arc<Library>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book by id
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(id.and_then(|id| library.book(id)).map(Into::into))
    }

    /// List of all books, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        Ok(library(ctx)?.books().into_iter().map(Into::into).collect())
    }

    /// A single author by id
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(id.and_then(|id| library.author(id)).map(Into::into))
    }

    /// List of all authors, in insertion order
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        Ok(library(ctx)?.authors().into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a single book and return the created record
    ///
    /// `authorId` is not checked against existing authors; a dangling value
    /// only fails later, when the book's `author` field is queried.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = library(ctx)?.add_book(name, author_id);
        info!(id = book.id, name = %book.name, "added book");
        Ok(book.into())
    }

    /// Add a single author and return the created record
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let author = library(ctx)?.add_author(name);
        info!(id = author.id, name = %author.name, "added author");
        Ok(author.into())
    }
}
