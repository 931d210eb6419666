//! Record model for the shelf gateway.
//!
//! Authors and books are flat records. The only relationship between them is
//! the `author_id` foreign key carried by each [`Book`]; the reverse direction
//! (an author's books) is computed by filtering, never stored.

pub mod id;
pub mod record;

pub use id::{AuthorId, BookId};
pub use record::{Author, Book};
