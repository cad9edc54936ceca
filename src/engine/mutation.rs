//! # Mutation Engine
//!
//! Create and delete, each a single independently committed store call.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::model::{NewQuestion, QuestionId};
use crate::store::TriviaStore;

use super::errors::{EngineError, EngineResult};

/// Write-side engine over a trivia store
#[derive(Debug)]
pub struct MutationEngine {
    store: Arc<dyn TriviaStore>,
}

impl MutationEngine {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Persist a new question and return its id.
    ///
    /// The category must exist; a question pointing at an unknown category
    /// is rejected as unprocessable. Any store failure on this path is
    /// unprocessable too.
    pub fn create_question(&self, question: NewQuestion) -> EngineResult<QuestionId> {
        question
            .validate()
            .map_err(|e| EngineError::unprocessable(e.to_string()))?;

        let category = self.store.category(question.category).map_err(|e| {
            warn!(error = %e, "Question create failed: category lookup");
            EngineError::unprocessable(e.to_string())
        })?;
        if category.is_none() {
            warn!(category = question.category, "Question create rejected: unknown category");
            return Err(EngineError::unprocessable(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let id = self.store.insert_question(&question).map_err(|e| {
            if e.is_rejection() {
                warn!(error = %e, "Question create rejected by store");
            } else {
                error!(error = %e, "Question create failed");
            }
            EngineError::unprocessable(e.to_string())
        })?;

        info!(question_id = id, category = question.category, "Question created");
        Ok(id)
    }

    /// Delete a question and return its id.
    ///
    /// A missing question is unprocessable rather than not-found, and so
    /// is any store failure.
    pub fn delete_question(&self, id: QuestionId) -> EngineResult<QuestionId> {
        let existing = self.store.question(id).map_err(|e| {
            warn!(question_id = id, error = %e, "Question delete failed: lookup");
            EngineError::unprocessable(e.to_string())
        })?;
        if existing.is_none() {
            warn!(question_id = id, "Question delete rejected: no such question");
            return Err(EngineError::unprocessable(format!(
                "question {id} does not exist"
            )));
        }

        match self.store.delete_question(id) {
            Ok(true) => {
                info!(question_id = id, "Question deleted");
                Ok(id)
            }
            Ok(false) => {
                warn!(question_id = id, "Question vanished before delete");
                Err(EngineError::unprocessable(format!(
                    "question {id} does not exist"
                )))
            }
            Err(e) => {
                warn!(question_id = id, error = %e, "Question delete failed");
                Err(EngineError::unprocessable(e.to_string()))
            }
        }
    }
}
