//! The [`RecordStore`] trait defining the storage contract for authors and
//! books.
//!
//! Collections are append-only and ordered by insertion. Read methods never
//! fail: a missing record is `None` and an empty filter result is an empty
//! `Vec`. Insert methods allocate the new id and append in one call, so a
//! caller holding `&mut self` can never observe two records with the same id.

use shelf_core::{Author, AuthorId, Book, BookId};

/// The storage contract used by the schema resolvers.
///
/// The trait is synchronous; callers share a store across tasks by wrapping
/// it in an async `RwLock`.
pub trait RecordStore {
    // -------------------------------------------------------------------
    // Authors
    // -------------------------------------------------------------------

    /// All authors in insertion order.
    fn authors(&self) -> &[Author];

    /// First author whose id equals `id`.
    fn find_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors().iter().find(|author| author.id == id)
    }

    /// The id the next [`insert_author`](Self::insert_author) will assign.
    fn next_author_id(&self) -> AuthorId {
        AuthorId::after(self.authors().len())
    }

    /// Appends a new author and returns it.
    fn insert_author(&mut self, name: String) -> Author;

    // -------------------------------------------------------------------
    // Books
    // -------------------------------------------------------------------

    /// All books in insertion order.
    fn books(&self) -> &[Book];

    /// First book whose id equals `id`.
    fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books().iter().find(|book| book.id == id)
    }

    /// Books written by `author`, in insertion order.
    fn books_by_author(&self, author: AuthorId) -> Vec<&Book> {
        self.books().iter().filter(|book| book.is_by(author)).collect()
    }

    /// The id the next [`insert_book`](Self::insert_book) will assign.
    fn next_book_id(&self) -> BookId {
        BookId::after(self.books().len())
    }

    /// Appends a new book and returns it. `author_id` is stored as given.
    fn insert_book(&mut self, name: String, author_id: AuthorId) -> Book;
}
