use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::model::{Author, Book};

/// The in-memory record store shared by every resolver.
///
/// Both sequences are append-only for the life of the process: records are
/// never edited or removed, so reads always see a prefix-stable insertion
/// order. Ids come from atomic counters rather than `len() + 1`, so they stay
/// unique and monotonically increasing even when mutations race.
pub struct Library {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
    next_author_id: AtomicI32,
    next_book_id: AtomicI32,
}

impl Library {
    /// An empty library with id counters starting at 1.
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(Vec::new()),
            books: RwLock::new(Vec::new()),
            next_author_id: AtomicI32::new(1),
            next_book_id: AtomicI32::new(1),
        }
    }

    /// The stock demo data: three authors and their eight books.
    pub fn with_seed_data() -> Self {
        let library = Self::new();
        let rowling = library.add_author("J. K. Rowling");
        let tolkien = library.add_author("J. R. R. Tolkien");
        let weeks = library.add_author("Brent Weeks");

        library.add_book("Harry Potter and the Chamber of Secrets", rowling.id);
        library.add_book("Harry Potter and the Prisoner of Azkaban", rowling.id);
        library.add_book("Harry Potter and the Goblet of Fire", rowling.id);
        library.add_book("The Fellowship of the Ring", tolkien.id);
        library.add_book("The Two Towers", tolkien.id);
        library.add_book("The Return of the King", tolkien.id);
        library.add_book("The Way of Shadows", weeks.id);
        library.add_book("Beyond the Shadows", weeks.id);

        library
    }

    /// Snapshot of all authors in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.authors.read().expect("authors lock poisoned").clone()
    }

    /// Snapshot of all books in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.books.read().expect("books lock poisoned").clone()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.authors
            .read()
            .expect("authors lock poisoned")
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        self.books
            .read()
            .expect("books lock poisoned")
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// All books whose `author_id` matches, in insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.books
            .read()
            .expect("books lock poisoned")
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Append a new author and return the created record.
    pub fn add_author(&self, name: impl Into<String>) -> Author {
        let id = self.next_author_id.fetch_add(1, Ordering::Relaxed);
        let author = Author::new(id, name);
        self.authors
            .write()
            .expect("authors lock poisoned")
            .push(author.clone());
        author
    }

    /// Append a new book and return the created record.
    ///
    /// `author_id` is taken as-is; whether a matching author exists is only
    /// checked lazily when the book's `author` relation is resolved.
    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Book {
        let id = self.next_book_id.fetch_add(1, Ordering::Relaxed);
        let book = Book::new(id, name, author_id);
        self.books
            .write()
            .expect("books lock poisoned")
            .push(book.clone());
        book
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn seed_data_shape() {
        let library = Library::with_seed_data();
        assert_eq!(library.authors().len(), 3);
        assert_eq!(library.books().len(), 8);
        assert_eq!(library.author(2).unwrap().name, "J. R. R. Tolkien");
        assert_eq!(
            library.book(1).unwrap().name,
            "Harry Potter and the Chamber of Secrets"
        );
    }

    #[test]
    fn lookup_miss_returns_none() {
        let library = Library::with_seed_data();
        assert!(library.author(99).is_none());
        assert!(library.book(99).is_none());
    }

    #[test]
    fn books_by_author_preserves_insertion_order() {
        let library = Library::with_seed_data();
        let names: Vec<_> = library
            .books_by_author(2)
            .into_iter()
            .map(|book| book.name)
            .collect();
        assert_eq!(
            names,
            [
                "The Fellowship of the Ring",
                "The Two Towers",
                "The Return of the King"
            ]
        );
    }

    #[test]
    fn add_author_continues_id_sequence() {
        let library = Library::with_seed_data();
        let author = library.add_author("Brandon Sanderson");
        assert_eq!(author.id, 4);
        assert_eq!(library.authors().last().unwrap().name, "Brandon Sanderson");
    }

    #[test]
    fn add_book_accepts_dangling_author_id() {
        let library = Library::with_seed_data();
        let book = library.add_book("X", 99);
        assert_eq!(book.id, 9);
        assert!(library.author(book.author_id).is_none());
    }

    #[test]
    fn concurrent_adds_get_unique_ids() {
        let library = Arc::new(Library::with_seed_data());
        let handles: Vec<_> = (0..16)
            .map(|n| {
                let library = Arc::clone(&library);
                thread::spawn(move || library.add_book(format!("Book {n}"), 1).id)
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
