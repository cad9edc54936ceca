//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::app::TriviaApp;
use trivia_api::config::AppConfig;
use trivia_api::engine::PageBoundary;
use trivia_api::model::{Category, NewQuestion};
use trivia_api::store::MemoryStore;

pub const SEED: u64 = 7;

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

/// Fifteen questions: ids 1..=15. Categories cycle 1..=5; category 6 is empty.
pub fn questions() -> Vec<NewQuestion> {
    (1..=15)
        .map(|i| NewQuestion {
            question: format!("Question number {i}?"),
            answer: format!("Answer {i}"),
            difficulty: (i % 4) + 1,
            category: ((i - 1) % 5) + 1,
        })
        .collect()
}

pub fn config(boundary: PageBoundary) -> AppConfig {
    AppConfig {
        page_boundary: boundary,
        quiz_seed: Some(SEED),
        ..AppConfig::default()
    }
}

pub fn seeded_app(boundary: PageBoundary) -> TriviaApp {
    let store = MemoryStore::with_data(categories(), questions()).unwrap();
    TriviaApp::with_store(config(boundary), Arc::new(store))
}

pub fn empty_app() -> TriviaApp {
    TriviaApp::with_store(config(PageBoundary::default()), Arc::new(MemoryStore::new()))
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    read(send(router, request).await).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    read(send(router, request).await).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    read(send(router, request).await).await
}

pub async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
