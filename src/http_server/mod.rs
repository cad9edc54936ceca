//! # Trivia HTTP Server Module
//!
//! Axum-based HTTP surface of the trivia service.
//!
//! # Endpoints
//!
//! - `GET /categories` - Category id to name mapping
//! - `GET /questions?page=N` - Paginated question listing
//! - `POST /questions` - Create a question
//! - `DELETE /questions/{id}` - Delete a question
//! - `POST /questions/search` - Case-insensitive text search
//! - `GET /categories/{id}/questions` - Questions in one category
//! - `POST /quizzes` - Next random unseen quiz question
//! - `GET /health` - Health check

pub mod errors;
pub mod request;
pub mod response;
pub mod server;
pub mod trivia_routes;

pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use trivia_routes::{trivia_routes, TriviaState};
