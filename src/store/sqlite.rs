//! # SQLite Store
//!
//! Durable backend for the `categories` and `questions` tables.
//!
//! A single connection is shared behind a mutex. Foreign keys are switched on
//! so a question can only name an existing category, and `AUTOINCREMENT`
//! guarantees deleted ids are never handed out again. Text search and quiz
//! exclusion are applied to id-ordered rows in Rust.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::errors::{StoreError, StoreResult};
use super::{contains_ignore_case, CategoryStore, QuestionStore, TriviaStore};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY,
        type TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 4),
        category INTEGER NOT NULL REFERENCES categories(id)
    );

    CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
";

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, difficulty, category FROM questions";

/// SQLite-backed trivia store
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Option<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the schema exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Option<Connection>>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))
    }

    fn with_conn<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let guard = self.lock()?;
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        f(conn).map_err(StoreError::from)
    }

    fn query_questions<P: Params>(&self, sql: &str, params: P) -> StoreResult<Vec<Question>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map(params, row_to_question)?;
            let questions = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(questions)
        })
    }
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        difficulty: row.get(3)?,
        category: row.get(4)?,
    })
}

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

impl CategoryStore for SqliteStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
            let rows = stmt.query_map([], row_to_category)?;
            let categories = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(categories)
        })
    }

    fn category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                row_to_category,
            )
            .optional()
        })
    }

    fn put_category(&self, category: &Category) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO categories (id, type) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET type = excluded.type",
                params![category.id, category.kind],
            )?;
            Ok(())
        })
    }
}

impl QuestionStore for SqliteStore {
    fn questions(&self) -> StoreResult<Vec<Question>> {
        self.query_questions(&format!("{SELECT_QUESTIONS} ORDER BY id"), [])
    }

    fn questions_in_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        self.query_questions(
            &format!("{SELECT_QUESTIONS} WHERE category = ?1 ORDER BY id"),
            params![category],
        )
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        // Unicode case folding, which LIKE lacks
        let mut questions = self.questions()?;
        questions.retain(|q| contains_ignore_case(&q.question, term));
        Ok(questions)
    }

    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> StoreResult<Vec<Question>> {
        let mut questions = match category {
            Some(category) => self.questions_in_category(category)?,
            None => self.questions()?,
        };

        // SQLite caps bound parameters, so exclusions are not bound
        let excluded: HashSet<QuestionId> = exclude.iter().copied().collect();
        questions.retain(|q| !excluded.contains(&q.id));
        Ok(questions)
    }

    fn question(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("{SELECT_QUESTIONS} WHERE id = ?1"),
                params![id],
                row_to_question,
            )
            .optional()
        })
    }

    fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO questions (question, answer, difficulty, category)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question,
                    question.answer,
                    question.difficulty,
                    question.category
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn delete_question(&self, id: QuestionId) -> StoreResult<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }
}

impl TriviaStore for SqliteStore {
    fn close(&self) -> StoreResult<()> {
        let mut guard = self.lock()?;
        match guard.take() {
            Some(conn) => conn.close().map_err(|(_, e)| StoreError::from(e)),
            None => Ok(()),
        }
    }
}
