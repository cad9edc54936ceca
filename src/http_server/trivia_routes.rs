//! Trivia HTTP Routes
//!
//! Endpoints for categories, questions, search and quizzes. Each handler
//! validates its input into a typed command, calls one engine operation and
//! wraps the result in the success envelope.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};

use tracing::error;

use crate::engine::{EngineResult, MutationEngine, QueryEngine};
use crate::model::{CategoryId, QuestionId};

use super::errors::ApiError;
use super::request::{page_param, CreateQuestionBody, QuizBody, SearchBody};
use super::response::{
    CategoriesResponse, CreatedResponse, DeletedResponse, HealthResponse,
    QuestionListResponse, QuestionMatchesResponse, QuizResponse,
};

// ==================
// Shared State
// ==================

/// Engines shared across handlers
#[derive(Debug)]
pub struct TriviaState {
    pub query: QueryEngine,
    pub mutation: MutationEngine,
}

impl TriviaState {
    pub fn new(query: QueryEngine, mutation: MutationEngine) -> Self {
        Self { query, mutation }
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run an engine call on the blocking pool; store calls are synchronous
async fn run_blocking<T, F>(state: Arc<TriviaState>, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&TriviaState) -> EngineResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!(error = %e, "Blocking task failed");
            ApiError::Internal
        })?
        .map_err(ApiError::from)
}

// ==================
// Trivia Routes
// ==================

/// Create trivia routes
pub fn trivia_routes(state: Arc<TriviaState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        // Categories
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/:category_id/questions",
            get(questions_by_category_handler),
        )
        // Questions
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/:question_id", delete(delete_question_handler))
        // Quizzes
        .route("/quizzes", post(quiz_handler))
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ==================
// Category Handlers
// ==================

async fn list_categories_handler(
    State(state): State<Arc<TriviaState>>,
) -> ApiResult<CategoriesResponse> {
    let categories = run_blocking(state, |s| s.query.category_names()).await?;
    Ok(Json(CategoriesResponse::new(categories)))
}

async fn questions_by_category_handler(
    State(state): State<Arc<TriviaState>>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> ApiResult<QuestionMatchesResponse> {
    let Path(category_id) = category_id?;
    let matches =
        run_blocking(state, move |s| s.query.questions_by_category(category_id)).await?;
    Ok(Json(matches.into()))
}

// ==================
// Question Handlers
// ==================

async fn list_questions_handler(
    State(state): State<Arc<TriviaState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<QuestionListResponse> {
    let page_number = page_param(&params);
    let page = run_blocking(state, move |s| s.query.list_questions(page_number)).await?;
    Ok(Json(page.into()))
}

async fn create_question_handler(
    State(state): State<Arc<TriviaState>>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(body) = body?;
    let command = body.into_command()?;
    let id = run_blocking(state, move |s| s.mutation.create_question(command)).await?;
    Ok(Json(CreatedResponse::new(id)))
}

async fn delete_question_handler(
    State(state): State<Arc<TriviaState>>,
    question_id: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<DeletedResponse> {
    let Path(question_id) = question_id?;
    let deleted = run_blocking(state, move |s| s.mutation.delete_question(question_id)).await?;
    Ok(Json(DeletedResponse::new(deleted)))
}

async fn search_questions_handler(
    State(state): State<Arc<TriviaState>>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<QuestionMatchesResponse> {
    let Json(body) = body?;
    let matches = run_blocking(state, move |s| {
        s.query.search_questions(body.search_term.as_deref())
    })
    .await?;
    Ok(Json(matches.into()))
}

// ==================
// Quiz Handlers
// ==================

async fn quiz_handler(
    State(state): State<Arc<TriviaState>>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(body) = body?;
    let request = body.into_command()?;
    let question = run_blocking(state, move |s| s.query.next_quiz_question(&request)).await?;
    Ok(Json(QuizResponse::new(question)))
}
