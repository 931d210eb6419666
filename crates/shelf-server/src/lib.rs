//! GraphQL gateway over the shelf record store.
//!
//! Exposes `book`, `books`, `author` and `authors` queries plus `addBook` and
//! `addAuthor` mutations on a single `/graphql` endpoint. This crate holds the
//! schema, application state, configuration and route definitions; the
//! `shelf-server` binary wires them to a TCP listener.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
