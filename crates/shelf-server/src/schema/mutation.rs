//! The `Mutation` root: appending books and authors.
//!
//! Required arguments are declared non-null, so a document that omits one is
//! rejected during validation and never reaches the store.

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, TypeRef};
use shelf_core::AuthorId;
use shelf_storage::RecordStore;

use super::store;
use super::types::{AUTHOR, BOOK};

pub const MUTATION: &str = "Mutation";

pub fn mutation_root() -> Object {
    Object::new(MUTATION)
        .description("Root Mutation")
        .field(
            Field::new("addBook", TypeRef::named(BOOK), |ctx| {
                FieldFuture::new(async move {
                    let name = ctx.args.try_get("name")?.string()?.to_owned();
                    let author_id = AuthorId(ctx.args.try_get("authorId")?.i64()?);

                    let mut store = store(&ctx)?.write().await;
                    let book = store.insert_book(name, author_id);
                    tracing::info!(id = %book.id, author = %book.author_id, "added book");
                    Ok(Some(FieldValue::owned_any(book)))
                })
            })
            .description("Adds a book")
            .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING)))
            .argument(InputValue::new("authorId", TypeRef::named_nn(TypeRef::INT))),
        )
        .field(
            Field::new("addAuthor", TypeRef::named(AUTHOR), |ctx| {
                FieldFuture::new(async move {
                    let name = ctx.args.try_get("name")?.string()?.to_owned();

                    let mut store = store(&ctx)?.write().await;
                    let author = store.insert_author(name);
                    tracing::info!(id = %author.id, "added author");
                    Ok(Some(FieldValue::owned_any(author)))
                })
            })
            .description("Adds an author")
            .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING))),
        )
}
