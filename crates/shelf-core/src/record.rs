//! Flat author and book records.

use serde::{Deserialize, Serialize};

use crate::id::{AuthorId, BookId};

/// A stored author. Books are linked to authors only through
/// [`Book::author_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// A stored book.
///
/// `author_id` is not checked against the author collection when the book is
/// written; a dangling reference simply resolves to no author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author_id: AuthorId,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Author {
            id,
            name: name.into(),
        }
    }
}

impl Book {
    pub fn new(id: BookId, name: impl Into<String>, author_id: AuthorId) -> Self {
        Book {
            id,
            name: name.into(),
            author_id,
        }
    }

    /// Whether this book was written by `author`.
    pub fn is_by(&self, author: AuthorId) -> bool {
        self.author_id == author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_uses_camel_case_foreign_key() {
        let book = Book::new(BookId(1), "harry potter", AuthorId(1));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["authorId"], 1);
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn is_by_compares_foreign_key() {
        let book = Book::new(BookId(2), "the fellowship of the ring", AuthorId(2));
        assert!(book.is_by(AuthorId(2)));
        assert!(!book.is_by(AuthorId(1)));
    }
}
