//! # Question Engine
//!
//! Query and mutation logic on top of the trivia store. Neither engine keeps
//! state between calls beyond its configuration and random source.

mod errors;
mod mutation;
mod pagination;
mod query;
mod quiz;

pub use errors::{EngineError, EngineResult};
pub use mutation::MutationEngine;
pub use pagination::{slice_page, PageBoundary, QUESTIONS_PER_PAGE};
pub use query::{QueryEngine, QuestionMatches, QuestionPage};
pub use quiz::{QuizRequest, QuizSelector, ANY_CATEGORY};
