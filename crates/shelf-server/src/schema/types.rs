//! The `Book` and `Author` object types.
//!
//! Each type refers to the other by name only (`TypeRef::named`). Names are
//! resolved when the schema is finished, after both objects are registered,
//! so neither declaration has to exist before the other.
//!
//! Parent values are the stored records themselves, carried as
//! `FieldValue::owned_any`. Scalar fields project out of the record; the two
//! relationship fields go back to the store.

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, ResolverContext, TypeRef};
use async_graphql::Value as GqlValue;
use shelf_core::{Author, Book};
use shelf_storage::RecordStore;

use super::error::internal_error;
use super::store;

pub const BOOK: &str = "Book";
pub const AUTHOR: &str = "Author";

pub fn book_type() -> Object {
    Object::new(BOOK)
        .description("Book written by an author")
        .field(scalar_field::<Book, _>("id", TypeRef::named_nn(TypeRef::INT), |book| {
            book.id.0.into()
        }))
        .field(scalar_field::<Book, _>("name", TypeRef::named_nn(TypeRef::STRING), |book| {
            book.name.clone().into()
        }))
        .field(scalar_field::<Book, _>("authorId", TypeRef::named_nn(TypeRef::INT), |book| {
            book.author_id.0.into()
        }))
        .field(Field::new("author", TypeRef::named(AUTHOR), |ctx| {
            FieldFuture::new(async move {
                let book = parent::<Book>(&ctx)?;
                let store = store(&ctx)?.read().await;
                let author = store.find_author(book.author_id).cloned();
                if author.is_none() {
                    tracing::debug!(book = %book.id, author = %book.author_id, "book has no matching author");
                }
                Ok(author.map(FieldValue::owned_any))
            })
        }))
}

pub fn author_type() -> Object {
    Object::new(AUTHOR)
        .description("This represents an author of a book")
        .field(scalar_field::<Author, _>("id", TypeRef::named_nn(TypeRef::INT), |author| {
            author.id.0.into()
        }))
        .field(scalar_field::<Author, _>("name", TypeRef::named_nn(TypeRef::STRING), |author| {
            author.name.clone().into()
        }))
        .field(Field::new("books", TypeRef::named_list(BOOK), |ctx| {
            FieldFuture::new(async move {
                let author = parent::<Author>(&ctx)?;
                let store = store(&ctx)?.read().await;
                let books: Vec<FieldValue> = store
                    .books_by_author(author.id)
                    .into_iter()
                    .cloned()
                    .map(FieldValue::owned_any)
                    .collect();
                Ok(Some(FieldValue::list(books)))
            })
        }))
}

/// The record a field is being resolved on.
fn parent<'a, T: std::any::Any>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a T> {
    ctx.parent_value
        .downcast_ref::<T>()
        .ok_or_else(|| internal_error(format!("failed to downcast {}", std::any::type_name::<T>())).into())
}

/// A field read straight off the parent record.
fn scalar_field<T, F>(name: &str, ty: TypeRef, project: F) -> Field
where
    T: std::any::Any,
    F: Fn(&T) -> GqlValue + Send + Sync + 'static,
{
    Field::new(name, ty, move |ctx| {
        let value = parent::<T>(&ctx).map(&project);
        FieldFuture::new(async move { Ok(Some(FieldValue::value(value?))) })
    })
}
