//! trivia-api - a trivia question bank served over HTTP
//!
//! Categories and questions live in SQLite behind the [`store`] traits;
//! [`engine`] holds the listing, search, pagination and quiz rules; and
//! [`http_server`] exposes them as a JSON API.

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
