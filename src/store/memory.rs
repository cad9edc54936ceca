//! # In-Memory Store
//!
//! Both tables kept in ordered maps behind one lock. Mirrors the SQLite
//! backend's constraints: ids are never reused and a question must name an
//! existing category.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::errors::{StoreError, StoreResult};
use super::{contains_ignore_case, CategoryStore, QuestionStore, TriviaStore};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_question_id: QuestionId,
    closed: bool,
}

/// In-process trivia store
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: RwLock::new(Tables {
                categories: BTreeMap::new(),
                questions: BTreeMap::new(),
                next_question_id: 1,
                closed: false,
            }),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with categories and questions.
    /// Questions receive ids 1..=n in the given order.
    pub fn with_data(categories: Vec<Category>, questions: Vec<NewQuestion>) -> StoreResult<Self> {
        let store = Self::new();
        for category in &categories {
            store.put_category(category)?;
        }
        for question in &questions {
            store.insert_question(question)?;
        }
        Ok(store)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        if tables.closed {
            return Err(StoreError::Closed);
        }
        Ok(tables)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        let tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        if tables.closed {
            return Err(StoreError::Closed);
        }
        Ok(tables)
    }

    fn select<F>(&self, predicate: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.read()?;
        Ok(tables
            .questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect())
    }
}

impl CategoryStore for MemoryStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn put_category(&self, category: &Category) -> StoreResult<()> {
        self.write()?
            .categories
            .insert(category.id, category.clone());
        Ok(())
    }
}

impl QuestionStore for MemoryStore {
    fn questions(&self) -> StoreResult<Vec<Question>> {
        self.select(|_| true)
    }

    fn questions_in_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        self.select(|q| q.category == category)
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.select(|q| contains_ignore_case(&q.question, term))
    }

    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> StoreResult<Vec<Question>> {
        let excluded: HashSet<QuestionId> = exclude.iter().copied().collect();
        self.select(|q| {
            !excluded.contains(&q.id) && category.map_or(true, |c| q.category == c)
        })
    }

    fn question(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        let mut tables = self.write()?;

        if !tables.categories.contains_key(&question.category) {
            return Err(StoreError::Constraint(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let id = tables.next_question_id;
        tables.next_question_id += 1;
        tables.questions.insert(id, question.clone().with_id(id));
        Ok(id)
    }

    fn delete_question(&self, id: QuestionId) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}

impl TriviaStore for MemoryStore {
    fn close(&self) -> StoreResult<()> {
        self.tables
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?
            .closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_q(text: &str, category: CategoryId) -> NewQuestion {
        NewQuestion::new(text, "answer", 1, category).unwrap()
    }

    fn seeded() -> MemoryStore {
        MemoryStore::with_data(
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
            vec![
                new_q("What is H2O?", 1),
                new_q("Who painted Guernica?", 2),
                new_q("What is the speed of light?", 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_ids_are_sequential_and_never_reused() {
        let store = seeded();
        assert!(store.delete_question(3).unwrap());

        let id = store.insert_question(&new_q("New one", 1)).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn test_insert_rejects_unknown_category() {
        let store = seeded();
        let err = store.insert_question(&new_q("Orphan", 99)).unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_quiz_candidates_exclusion_and_category() {
        let store = seeded();

        let any: Vec<_> = store
            .quiz_candidates(None, &[1])
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(any, vec![2, 3]);

        let science: Vec<_> = store
            .quiz_candidates(Some(1), &[1])
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(science, vec![3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = seeded();
        let hits = store.search_questions("WHAT IS").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_closed_store_rejects_calls() {
        let store = seeded();
        store.close().unwrap();
        assert!(matches!(store.questions(), Err(StoreError::Closed)));
    }
}
