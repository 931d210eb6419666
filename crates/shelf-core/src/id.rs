//! Identifier newtypes for stored records.
//!
//! Both IDs wrap an `i64` (the GraphQL `Int` argument is read as `i64`), but
//! they are distinct types so that a `BookId` cannot be used where an
//! `AuthorId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an [`Author`](crate::Author).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

/// Identifier of a [`Book`](crate::Book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl AuthorId {
    /// The id assigned to the record appended after `len` existing ones.
    pub fn after(len: usize) -> Self {
        AuthorId(len as i64 + 1)
    }
}

impl BookId {
    /// The id assigned to the record appended after `len` existing ones.
    pub fn after(len: usize) -> Self {
        BookId(len as i64 + 1)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
