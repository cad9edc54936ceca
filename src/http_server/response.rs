//! # Response Formatting
//!
//! Success envelopes for each endpoint. Every body carries `"success": true`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::{QuestionMatches, QuestionPage};
use crate::model::{CategoryId, Question, QuestionId};

/// `GET /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

impl CategoriesResponse {
    pub fn new(categories: BTreeMap<CategoryId, String>) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// `GET /questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
}

impl From<QuestionPage> for QuestionListResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: page.categories,
            current_category: None,
        }
    }
}

/// `POST /questions/search` and `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionMatchesResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

impl From<QuestionMatches> for QuestionMatchesResponse {
    fn from(matches: QuestionMatches) -> Self {
        Self {
            success: true,
            questions: matches.questions,
            total_questions: matches.total_questions,
            current_category: matches.current_category,
        }
    }
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

impl CreatedResponse {
    pub fn new(created: QuestionId) -> Self {
        Self {
            success: true,
            created,
        }
    }
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

impl DeletedResponse {
    pub fn new(deleted: QuestionId) -> Self {
        Self {
            success: true,
            deleted,
        }
    }
}

/// `POST /quizzes`; `question` is null once the quiz is exhausted
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}

/// `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_categories_keys_serialize_as_strings() {
        let mut categories = BTreeMap::new();
        categories.insert(2, "Art".to_string());
        categories.insert(1, "Science".to_string());

        let json = serde_json::to_value(CategoriesResponse::new(categories)).unwrap();
        assert_eq!(
            json,
            json!({"success": true, "categories": {"1": "Science", "2": "Art"}})
        );
    }

    #[test]
    fn test_list_response_current_category_null() {
        let page = QuestionPage {
            questions: vec![],
            total_questions: 0,
            categories: BTreeMap::new(),
        };
        let json = serde_json::to_value(QuestionListResponse::from(page)).unwrap();
        assert!(json["current_category"].is_null());
    }

    #[test]
    fn test_quiz_response_null_question() {
        let json = serde_json::to_value(QuizResponse::new(None)).unwrap();
        assert_eq!(json, json!({"success": true, "question": null}));
    }
}
