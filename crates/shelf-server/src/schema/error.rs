//! Errors raised while building the schema or resolving fields.
//!
//! Resolver functions return `async_graphql::Result`, and `GqlError`
//! converts into `async_graphql::Error` through its `Display` impl, so `?`
//! works inside resolvers. Each such error is reported against the field
//! that raised it and leaves sibling fields untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GqlError {
    #[error("Error generating schema: {0}")]
    SchemaError(String),
    #[error("Internal Error: {0}")]
    InternalError(String),
}

pub fn schema_error(msg: impl Into<String>) -> GqlError {
    GqlError::SchemaError(msg.into())
}

pub fn internal_error(msg: impl Into<String>) -> GqlError {
    let msg = msg.into();
    tracing::error!("{}", msg);
    GqlError::InternalError(msg)
}

impl From<async_graphql::dynamic::SchemaError> for GqlError {
    fn from(value: async_graphql::dynamic::SchemaError) -> Self {
        schema_error(value.0)
    }
}
