//! # Query Engine
//!
//! The read shapes served by the API: category listing, paginated question
//! listing, substring search, filter by category and quiz selection.
//! Every call re-reads the store.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::model::{Category, CategoryId, Question};
use crate::store::TriviaStore;

use super::errors::{EngineError, EngineResult};
use super::pagination::{slice_page, PageBoundary};
use super::quiz::{QuizRequest, QuizSelector};

/// One page of the full question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the unpaginated question table
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
}

/// Result of a search or category filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionMatches {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

impl QuestionMatches {
    fn new(questions: Vec<Question>, current_category: Option<CategoryId>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

/// Read-side engine over a trivia store
#[derive(Debug)]
pub struct QueryEngine {
    store: Arc<dyn TriviaStore>,
    boundary: PageBoundary,
    selector: QuizSelector,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn TriviaStore>, boundary: PageBoundary, selector: QuizSelector) -> Self {
        Self {
            store,
            boundary,
            selector,
        }
    }

    /// All categories ordered by id
    pub fn list_categories(&self) -> EngineResult<Vec<Category>> {
        let categories = self.store.categories()?;
        if categories.is_empty() {
            return Err(EngineError::NotFound);
        }
        Ok(categories)
    }

    /// Category id to display name, ordered by id
    pub fn category_names(&self) -> EngineResult<BTreeMap<CategoryId, String>> {
        Ok(to_name_map(self.list_categories()?))
    }

    /// One page of all questions ordered by id
    pub fn list_questions(&self, page: i64) -> EngineResult<QuestionPage> {
        let questions = self.store.questions()?;
        let categories = self.store.categories()?;
        let total = questions.len();

        if total == 0 || !self.boundary.admits(page, total) {
            debug!(page, total, boundary = ?self.boundary, "Question page rejected");
            return Err(EngineError::NotFound);
        }

        let page_questions = slice_page(&questions, page);
        debug!(page, total, returned = page_questions.len(), "Question page served");

        Ok(QuestionPage {
            questions: page_questions,
            total_questions: total,
            categories: to_name_map(categories),
        })
    }

    /// Questions whose text contains `term`, ignoring case.
    /// A missing term matches every question.
    pub fn search_questions(&self, term: Option<&str>) -> EngineResult<QuestionMatches> {
        let questions = self.store.search_questions(term.unwrap_or(""))?;
        debug!(term = ?term, matched = questions.len(), "Question search");

        if questions.is_empty() {
            return Err(EngineError::NotFound);
        }
        Ok(QuestionMatches::new(questions, None))
    }

    /// Questions in one category. The id is echoed back, not validated.
    pub fn questions_by_category(&self, category: CategoryId) -> EngineResult<QuestionMatches> {
        let questions = self.store.questions_in_category(category)?;
        debug!(category, matched = questions.len(), "Questions by category");

        if questions.is_empty() {
            return Err(EngineError::NotFound);
        }
        Ok(QuestionMatches::new(questions, Some(category)))
    }

    /// A random question not yet served in this quiz, or `None` once the
    /// candidate set is exhausted
    pub fn next_quiz_question(&self, request: &QuizRequest) -> EngineResult<Option<Question>> {
        let candidates = self
            .store
            .quiz_candidates(request.category_filter(), &request.previous_questions)?;
        let picked = self.selector.pick(&candidates)?;

        debug!(
            category = request.category,
            previous = request.previous_questions.len(),
            candidates = candidates.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question selected"
        );
        Ok(picked)
    }
}

fn to_name_map(categories: Vec<Category>) -> BTreeMap<CategoryId, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
