//! Initial contents of the record store.
//!
//! [`SeedData::builtin`] is the fixed data set the gateway starts with.
//! Alternative seeds can be read from a JSON file of the form
//! `{"authors": [{"id": 1, "name": ".."}], "books": [{"id": 1, "name": "..", "authorId": 1}]}`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shelf_core::{Author, AuthorId, Book, BookId};

use crate::error::StorageError;

/// Records a store is created with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl SeedData {
    /// The built-in seed: three authors with one book each.
    pub fn builtin() -> Self {
        SeedData {
            authors: vec![
                Author::new(AuthorId(1), "JkRowling"),
                Author::new(AuthorId(2), "jrr tolkien"),
                Author::new(AuthorId(3), "brent weeks"),
            ],
            books: vec![
                Book::new(BookId(1), "harry potter", AuthorId(1)),
                Book::new(BookId(2), "the fellowship of the ring", AuthorId(2)),
                Book::new(BookId(3), "the way of shadows", AuthorId(3)),
            ],
        }
    }

    /// Reads and validates a seed from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a seed from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let seed: SeedData = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks that ids in each collection are exactly `1..=n` in order.
    ///
    /// New records get `len + 1`, so any other numbering could hand out an
    /// id that is already taken.
    pub fn validate(&self) -> Result<(), StorageError> {
        check_sequential("author", self.authors.iter().map(|a| a.id.0))?;
        check_sequential("book", self.books.iter().map(|b| b.id.0))
    }
}

fn check_sequential(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<(), StorageError> {
    for (position, found) in ids.enumerate() {
        let expected = position as i64 + 1;
        if found != expected {
            return Err(StorageError::NonSequentialId {
                collection,
                position,
                expected,
                found,
            });
        }
    }
    Ok(())
}
