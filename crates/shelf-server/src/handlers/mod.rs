//! HTTP handlers for the shelf API.
//!
//! Handlers are thin: they extract the request, hand it to the schema held in
//! [`AppState`](crate::state::AppState), and return the response envelope.

pub mod graphql;
