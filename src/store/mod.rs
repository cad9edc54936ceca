//! # Trivia Store
//!
//! Repository traits for the two relational tables plus their backends.
//!
//! - [`CategoryStore`]: category records, read-only from the request surface
//! - [`QuestionStore`]: question records, create/read/delete
//! - [`SqliteStore`]: durable backend on a single SQLite connection
//! - [`MemoryStore`]: in-process backend for tests and ephemeral runs
//!
//! Every listing method returns records ordered by id. Stores hold no
//! derived state; callers re-read on every operation.

mod errors;
mod memory;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Category table access
pub trait CategoryStore: Send + Sync + std::fmt::Debug {
    /// All categories ordered by id
    fn categories(&self) -> StoreResult<Vec<Category>>;

    /// Look up one category
    fn category(&self, id: CategoryId) -> StoreResult<Option<Category>>;

    /// Insert or replace a category (seeding only)
    fn put_category(&self, category: &Category) -> StoreResult<()>;
}

/// Question table access
pub trait QuestionStore: Send + Sync + std::fmt::Debug {
    /// All questions ordered by id
    fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category equals `category`, ordered by id
    fn questions_in_category(&self, category: CategoryId) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    /// An empty term matches every question.
    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Questions not listed in `exclude`, restricted to `category` when given,
    /// ordered by id
    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> StoreResult<Vec<Question>>;

    /// Look up one question
    fn question(&self, id: QuestionId) -> StoreResult<Option<Question>>;

    /// Persist a new question and return its freshly assigned id
    fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId>;

    /// Remove a question; returns false when no row matched
    fn delete_question(&self, id: QuestionId) -> StoreResult<bool>;
}

/// A full backend: both tables plus an explicit release step
pub trait TriviaStore: CategoryStore + QuestionStore {
    /// Release the underlying handle. Later calls fail with [`StoreError::Closed`].
    fn close(&self) -> StoreResult<()>;
}

/// Case-insensitive substring test shared by in-process filtering
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
