//! In-memory implementation of [`RecordStore`].
//!
//! [`InMemoryStore`] keeps both collections in `Vec`s. It is the only backend:
//! records are volatile and live as long as the store does.

use shelf_core::{Author, AuthorId, Book};

use crate::error::StorageError;
use crate::seed::SeedData;
use crate::traits::RecordStore;

/// Append-only author and book collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the built-in seed records.
    pub fn seeded() -> Self {
        let SeedData { authors, books } = SeedData::builtin();
        InMemoryStore { authors, books }
    }

    /// Creates a store from seed data, validating its ids first.
    pub fn from_seed(seed: SeedData) -> Result<Self, StorageError> {
        seed.validate()?;
        let SeedData { authors, books } = seed;
        Ok(InMemoryStore { authors, books })
    }
}

impl RecordStore for InMemoryStore {
    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn insert_author(&mut self, name: String) -> Author {
        let author = Author::new(self.next_author_id(), name);
        self.authors.push(author.clone());
        author
    }

    fn books(&self) -> &[Book] {
        &self.books
    }

    fn insert_book(&mut self, name: String, author_id: AuthorId) -> Book {
        let book = Book::new(self.next_book_id(), name, author_id);
        self.books.push(book.clone());
        book
    }
}
