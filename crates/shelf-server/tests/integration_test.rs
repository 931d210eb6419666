//! End-to-end tests for the shelf HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> GraphQL
//! handler -> schema resolvers -> record store -> JSON envelope.
//!
//! Each test builds a fresh AppState over the built-in seed and sends requests
//! with `tower::ServiceExt::oneshot`, without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shelf_server::router::build_router;
use shelf_server::state::AppState;
use shelf_storage::{InMemoryStore, RecordStore};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> (Router, AppState) {
    let state = AppState::in_memory().expect("failed to create in-memory AppState");
    (build_router(state.clone()), state)
}

/// Posts a GraphQL request body and returns (status, json).
async fn post_graphql(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

async fn query(app: &Router, document: &str) -> Value {
    let (status, body) = post_graphql(app, json!({ "query": document })).await;
    assert_eq!(status, StatusCode::OK, "request failed: {:?}", body);
    body
}

fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["message"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn books_returns_seed_in_order() {
    let (app, _) = test_app();
    let body = query(&app, "{ books { id name authorId } }").await;

    assert!(body.get("errors").is_none(), "unexpected errors: {:?}", body);
    assert_eq!(
        body["data"]["books"],
        json!([
            { "id": 1, "name": "harry potter", "authorId": 1 },
            { "id": 2, "name": "the fellowship of the ring", "authorId": 2 },
            { "id": 3, "name": "the way of shadows", "authorId": 3 },
        ])
    );
}

#[tokio::test]
async fn authors_returns_seed_in_order() {
    let (app, _) = test_app();
    let body = query(&app, "{ authors { id name } }").await;

    assert_eq!(
        body["data"]["authors"],
        json!([
            { "id": 1, "name": "JkRowling" },
            { "id": 2, "name": "jrr tolkien" },
            { "id": 3, "name": "brent weeks" },
        ])
    );
}

#[tokio::test]
async fn author_with_books_in_one_request() {
    let (app, _) = test_app();
    let body = query(&app, "{ author(id:2){ name books{ name } } }").await;

    assert_eq!(
        body["data"],
        json!({
            "author": {
                "name": "jrr tolkien",
                "books": [{ "name": "the fellowship of the ring" }]
            }
        })
    );
}

#[tokio::test]
async fn every_book_resolves_its_author() {
    let (app, state) = test_app();
    let books = state.store.read().await.books().to_vec();

    for book in books {
        let body = query(&app, &format!("{{ book(id: {}) {{ authorId author {{ id }} }} }}", book.id)).await;
        assert_eq!(body["data"]["book"]["authorId"], json!(book.author_id.0));
        assert_eq!(body["data"]["book"]["author"]["id"], json!(book.author_id.0));
    }
}

#[tokio::test]
async fn missing_records_resolve_to_null() {
    let (app, _) = test_app();
    let body = query(
        &app,
        "{ found: book(id: 1) { name } missing: book(id: 42) { name } nobody: author(id: 0) { name } }",
    )
    .await;

    assert!(body.get("errors").is_none(), "lookup miss is not an error: {:?}", body);
    assert_eq!(body["data"]["found"]["name"], "harry potter");
    assert!(body["data"]["missing"].is_null());
    assert!(body["data"]["nobody"].is_null());
}

#[tokio::test]
async fn omitted_id_matches_nothing() {
    let (app, _) = test_app();
    let body = query(&app, "{ book { name } author(id: null) { name } }").await;

    assert!(body.get("errors").is_none(), "unexpected errors: {:?}", body);
    assert!(body["data"]["book"].is_null());
    assert!(body["data"]["author"].is_null());
}

#[tokio::test]
async fn repeated_queries_are_identical() {
    let (app, _) = test_app();
    let first = query(&app, "{ book(id: 1) { id name authorId author { name } } }").await;
    let second = query(&app, "{ book(id: 1) { id name authorId author { name } } }").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn variables_are_bound() {
    let (app, _) = test_app();
    let (status, body) = post_graphql(
        &app,
        json!({
            "query": "query Lookup($id: Int) { book(id: $id) { name } }",
            "variables": { "id": 3 },
            "operationName": "Lookup"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["name"], "the way of shadows");
}

#[tokio::test]
async fn batch_requests_execute_in_order() {
    let (app, _) = test_app();
    let (status, body) = post_graphql(
        &app,
        json!([
            { "query": "mutation { addAuthor(name: \"brandon sanderson\") { id } }" },
            { "query": "{ author(id: 4) { name } }" }
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["data"]["addAuthor"]["id"], 4);
    assert_eq!(body[1]["data"]["author"]["name"], "brandon sanderson");
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_author_appends_with_next_id() {
    let (app, _) = test_app();
    let before = query(&app, "{ authors { id } }").await;
    let len = before["data"]["authors"].as_array().unwrap().len();

    let body = query(&app, r#"mutation { addAuthor(name: "X") { id name books { id } } }"#).await;
    assert_eq!(
        body["data"]["addAuthor"],
        json!({ "id": len + 1, "name": "X", "books": [] })
    );

    let after = query(&app, "{ authors { id name } }").await;
    let authors = after["data"]["authors"].as_array().unwrap();
    assert_eq!(authors.len(), len + 1);
    assert_eq!(authors.last().unwrap(), &json!({ "id": len + 1, "name": "X" }));
}

#[tokio::test]
async fn add_book_stores_supplied_author_id() {
    let (app, _) = test_app();
    let body = query(
        &app,
        r#"mutation { addBook(name: "the two towers", authorId: 2) { id name authorId author { name } } }"#,
    )
    .await;

    assert_eq!(
        body["data"]["addBook"],
        json!({
            "id": 4,
            "name": "the two towers",
            "authorId": 2,
            "author": { "name": "jrr tolkien" }
        })
    );

    let body = query(&app, "{ author(id: 2) { books { name } } }").await;
    assert_eq!(
        body["data"]["author"]["books"],
        json!([{ "name": "the fellowship of the ring" }, { "name": "the two towers" }])
    );
}

#[tokio::test]
async fn add_book_with_unknown_author_resolves_null_author() {
    let (app, _) = test_app();
    let body = query(
        &app,
        r#"mutation { addBook(name: "orphan", authorId: 99) { authorId author { name } } }"#,
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {:?}", body);
    assert_eq!(body["data"]["addBook"]["authorId"], 99);
    assert!(body["data"]["addBook"]["author"].is_null());
}

#[tokio::test]
async fn add_book_without_name_is_rejected() {
    let (app, state) = test_app();
    let body = query(&app, "mutation { addBook(authorId: 1) { id } }").await;

    assert!(body["data"].is_null(), "no data expected: {:?}", body);
    let messages = error_messages(&body);
    assert!(messages.iter().any(|m| m.contains("name")), "{:?}", messages);
    assert_eq!(state.store.read().await.books().len(), 3);
}

#[tokio::test]
async fn add_author_without_name_is_rejected() {
    let (app, state) = test_app();
    let body = query(&app, "mutation { addAuthor { id } }").await;

    assert!(!error_messages(&body).is_empty());
    assert_eq!(state.store.read().await.authors().len(), 3);
}

// ---------------------------------------------------------------------------
// Document-level errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_field_fails_whole_document() {
    let (app, state) = test_app();
    let body = query(
        &app,
        r#"mutation { addAuthor(name: "never stored") { id publisher } }"#,
    )
    .await;

    assert!(body["data"].is_null());
    let messages = error_messages(&body);
    assert!(messages.iter().any(|m| m.contains("publisher")), "{:?}", messages);
    assert_eq!(state.store.read().await.authors().len(), 3);
}

#[tokio::test]
async fn mistyped_argument_is_rejected() {
    let (app, _) = test_app();
    let body = query(&app, r#"{ book(id: "one") { name } }"#).await;

    assert!(body["data"].is_null());
    assert!(!error_messages(&body).is_empty());
}

#[tokio::test]
async fn syntax_error_is_reported() {
    let (app, _) = test_app();
    let body = query(&app, "{ books { name ").await;

    assert!(body["data"].is_null());
    assert!(!error_messages(&body).is_empty());
}

// ---------------------------------------------------------------------------
// Exploration page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn graphiql_page_is_served_when_enabled() {
    let (app, _) = test_app();
    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/graphql"));
}

#[tokio::test]
async fn graphiql_page_is_absent_when_disabled() {
    let state = AppState::with_store(InMemoryStore::seeded(), false).unwrap();
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body = query(&app, "{ books { id } }").await;
    assert_eq!(body["data"]["books"].as_array().unwrap().len(), 3);
}
