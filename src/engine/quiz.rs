//! # Quiz Selection
//!
//! Picks the next question for a quiz session from the candidate set.
//! The random source is owned by the selector and can be seeded or replaced.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::model::{CategoryId, Question, QuestionId};

use super::errors::{EngineError, EngineResult};

/// Category id meaning "any category"
pub const ANY_CATEGORY: CategoryId = 0;

/// A validated quiz step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: CategoryId,
    pub previous_questions: Vec<QuestionId>,
}

impl QuizRequest {
    pub fn new(category: CategoryId, previous_questions: Vec<QuestionId>) -> Self {
        Self {
            category,
            previous_questions,
        }
    }

    /// Category filter to apply, `None` for the any-category sentinel
    pub fn category_filter(&self) -> Option<CategoryId> {
        (self.category != ANY_CATEGORY).then_some(self.category)
    }
}

/// Uniform random pick over quiz candidates
pub struct QuizSelector {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl QuizSelector {
    /// Seeded selector, or an entropy-seeded one when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::with_rng(StdRng::from_entropy()),
        }
    }

    /// Reproducible selector
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Use a caller-supplied random source
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Choose one candidate uniformly, or `None` when there are none
    pub fn pick(&self, candidates: &[Question]) -> EngineResult<Option<Question>> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EngineError::Internal("Lock poisoned".to_string()))?;
        Ok(candidates.choose(&mut **rng).cloned())
    }
}

impl std::fmt::Debug for QuizSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSelector").finish_non_exhaustive()
    }
}
