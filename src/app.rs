//! # Application Lifecycle
//!
//! Wires a store, the two engines and the HTTP server together from an
//! [`AppConfig`]. The store is opened once at startup and released in
//! [`TriviaApp::close`].

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::{AppConfig, ConfigError};
use crate::engine::{MutationEngine, QueryEngine, QuizSelector};
use crate::http_server::{HttpServer, TriviaState};
use crate::model::{Category, NewQuestion, QuestionId};
use crate::store::{SqliteStore, StoreError, TriviaStore};

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to read seed file: {0}")]
    SeedRead(#[source] std::io::Error),

    #[error("Invalid seed file: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Invalid seed question {question:?}: {reason}")]
    SeedQuestion { question: String, reason: String },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Initial data loaded by `trivia init --seed`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

impl SeedData {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(AppError::SeedRead)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write categories, then questions, into `store`. Returns the ids
    /// assigned to the questions.
    pub fn apply(&self, store: &dyn TriviaStore) -> AppResult<Vec<QuestionId>> {
        for category in &self.categories {
            store.put_category(category)?;
        }

        let mut ids = Vec::with_capacity(self.questions.len());
        for question in &self.questions {
            question.validate().map_err(|e| AppError::SeedQuestion {
                question: question.question.clone(),
                reason: e.to_string(),
            })?;
            ids.push(store.insert_question(question)?);
        }

        info!(
            categories = self.categories.len(),
            questions = ids.len(),
            "Seed data applied"
        );
        Ok(ids)
    }
}

/// A configured trivia service
#[derive(Debug)]
pub struct TriviaApp {
    config: AppConfig,
    store: Arc<dyn TriviaStore>,
    state: Arc<TriviaState>,
}

impl TriviaApp {
    /// Open the SQLite database named by the config
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let store = SqliteStore::open(config.database_path())?;
        info!(path = %config.database_path, "Database opened");
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build the service over an already opened store
    pub fn with_store(config: AppConfig, store: Arc<dyn TriviaStore>) -> Self {
        let selector = QuizSelector::new(config.quiz_seed);
        let query = QueryEngine::new(Arc::clone(&store), config.page_boundary, selector);
        let mutation = MutationEngine::new(Arc::clone(&store));
        let state = Arc::new(TriviaState::new(query, mutation));

        Self {
            config,
            store,
            state,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn TriviaStore> {
        &self.store
    }

    /// Router with every route and layer attached
    pub fn router(&self) -> Router {
        HttpServer::build_router(&self.config.server, Arc::clone(&self.state))
    }

    /// Serve until shutdown is signalled
    pub async fn serve(&self) -> AppResult<()> {
        HttpServer::new(self.config.server.clone(), Arc::clone(&self.state))
            .start()
            .await
            .map_err(AppError::Serve)
    }

    /// Release the store
    pub fn close(&self) -> AppResult<()> {
        self.store.close()?;
        info!("Database closed");
        Ok(())
    }
}
