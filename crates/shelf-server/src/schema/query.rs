//! The `Query` root: single and list lookups for books and authors.

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, ResolverContext, TypeRef};
use shelf_core::{AuthorId, BookId};
use shelf_storage::RecordStore;

use super::store;
use super::types::{AUTHOR, BOOK};

pub const QUERY: &str = "Query";

macro_rules! id_input {
    () => {
        InputValue::new("id", TypeRef::named(TypeRef::INT))
    };
}

pub fn query_root() -> Object {
    Object::new(QUERY)
        .description("Root Query")
        .field(
            Field::new("book", TypeRef::named(BOOK), |ctx| {
                FieldFuture::new(async move {
                    let Some(id) = id_arg(&ctx)? else {
                        return Ok(None);
                    };
                    let store = store(&ctx)?.read().await;
                    let book = store.find_book(BookId(id)).cloned();
                    tracing::debug!(id, found = book.is_some(), "book lookup");
                    Ok(book.map(FieldValue::owned_any))
                })
            })
            .description("A single book")
            .argument(id_input!()),
        )
        .field(
            Field::new("books", TypeRef::named_list(BOOK), |ctx| {
                FieldFuture::new(async move {
                    let store = store(&ctx)?.read().await;
                    let books: Vec<FieldValue> =
                        store.books().iter().cloned().map(FieldValue::owned_any).collect();
                    Ok(Some(FieldValue::list(books)))
                })
            })
            .description("List of books"),
        )
        .field(
            Field::new("author", TypeRef::named(AUTHOR), |ctx| {
                FieldFuture::new(async move {
                    let Some(id) = id_arg(&ctx)? else {
                        return Ok(None);
                    };
                    let store = store(&ctx)?.read().await;
                    let author = store.find_author(AuthorId(id)).cloned();
                    tracing::debug!(id, found = author.is_some(), "author lookup");
                    Ok(author.map(FieldValue::owned_any))
                })
            })
            .description("A single author")
            .argument(id_input!()),
        )
        .field(
            Field::new("authors", TypeRef::named_list(AUTHOR), |ctx| {
                FieldFuture::new(async move {
                    let store = store(&ctx)?.read().await;
                    let authors: Vec<FieldValue> =
                        store.authors().iter().cloned().map(FieldValue::owned_any).collect();
                    Ok(Some(FieldValue::list(authors)))
                })
            })
            .description("List of authors"),
        )
}

/// The optional `id` argument. Omitted and explicit `null` both match nothing.
fn id_arg(ctx: &ResolverContext<'_>) -> async_graphql::Result<Option<i64>> {
    match ctx.args.get("id") {
        Some(id) if !id.is_null() => Ok(Some(id.i64()?)),
        _ => Ok(None),
    }
}
