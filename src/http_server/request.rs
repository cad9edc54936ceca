//! # Request Bodies
//!
//! Wire shapes of the JSON request bodies and their conversion into the
//! typed commands the engines accept. Integer fields also accept numeric
//! strings, since browser form controls submit `"3"` rather than `3`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::engine::QuizRequest;
use crate::model::{CategoryId, NewQuestion, QuestionId};

use super::errors::ApiError;

/// An integer given either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Int(i64),
    Text(String),
}

impl LenientInt {
    pub fn value(&self) -> Result<i64, ApiError> {
        match self {
            LenientInt::Int(n) => Ok(*n),
            LenientInt::Text(s) => s.trim().parse().map_err(|_| ApiError::Unprocessable),
        }
    }
}

/// `page` query parameter; absent or non-numeric values mean page 1
pub fn page_param(params: &HashMap<String, String>) -> i64 {
    params
        .get("page")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1)
}

/// `POST /questions`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionBody {
    pub question: String,
    pub answer: String,
    pub difficulty: LenientInt,
    pub category: LenientInt,
}

impl CreateQuestionBody {
    pub fn into_command(self) -> Result<NewQuestion, ApiError> {
        let difficulty = self.difficulty.value()?;
        let category: CategoryId = self.category.value()?;
        NewQuestion::new(self.question, self.answer, difficulty, category)
            .map_err(|_| ApiError::Unprocessable)
    }
}

/// `POST /questions/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// `quiz_category` object of a quiz step; only `id` is read, the display
/// name clients send alongside it is ignored
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryBody {
    pub id: LenientInt,
}

/// `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizBody {
    pub quiz_category: QuizCategoryBody,
    pub previous_questions: Vec<LenientInt>,
}

impl QuizBody {
    pub fn into_command(self) -> Result<QuizRequest, ApiError> {
        let category = self.quiz_category.id.value()?;
        let previous_questions = self
            .previous_questions
            .iter()
            .map(LenientInt::value)
            .collect::<Result<Vec<QuestionId>, _>>()?;
        Ok(QuizRequest::new(category, previous_questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_param() {
        let mut params = HashMap::new();
        assert_eq!(page_param(&params), 1);

        params.insert("page".to_string(), "3".to_string());
        assert_eq!(page_param(&params), 3);

        params.insert("page".to_string(), "abc".to_string());
        assert_eq!(page_param(&params), 1);

        params.insert("page".to_string(), "-2".to_string());
        assert_eq!(page_param(&params), -2);
    }

    #[test]
    fn test_create_body_accepts_numeric_strings() {
        let body: CreateQuestionBody = serde_json::from_value(json!({
            "question": "What is 2+2?",
            "answer": "4",
            "difficulty": "1",
            "category": 1
        }))
        .unwrap();

        let cmd = body.into_command().unwrap();
        assert_eq!(cmd.difficulty, 1);
        assert_eq!(cmd.category, 1);
    }

    #[test]
    fn test_create_body_rejects_bad_values() {
        let body: CreateQuestionBody = serde_json::from_value(json!({
            "question": "What is 2+2?",
            "answer": "4",
            "difficulty": "hard",
            "category": 1
        }))
        .unwrap();
        assert_eq!(body.into_command(), Err(ApiError::Unprocessable));

        let body: CreateQuestionBody = serde_json::from_value(json!({
            "question": "",
            "answer": "4",
            "difficulty": 2,
            "category": 1
        }))
        .unwrap();
        assert_eq!(body.into_command(), Err(ApiError::Unprocessable));
    }

    #[test]
    fn test_create_body_requires_fields() {
        let result: Result<CreateQuestionBody, _> =
            serde_json::from_value(json!({"question": "Q?"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_search_body_term_optional() {
        let body: SearchBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.search_term, None);

        let body: SearchBody = serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(body.search_term.as_deref(), Some("title"));
    }

    #[test]
    fn test_quiz_body_into_command() {
        let body: QuizBody = serde_json::from_value(json!({
            "quiz_category": {"type": "Science", "id": "1"},
            "previous_questions": [4, "7"]
        }))
        .unwrap();

        let cmd = body.into_command().unwrap();
        assert_eq!(cmd.category, 1);
        assert_eq!(cmd.previous_questions, vec![4, 7]);
    }

    #[test]
    fn test_quiz_body_requires_category_id() {
        let result: Result<QuizBody, _> = serde_json::from_value(json!({
            "quiz_category": {"type": "click"},
            "previous_questions": []
        }));
        assert!(result.is_err());

        let result: Result<QuizBody, _> =
            serde_json::from_value(json!({"previous_questions": []}));
        assert!(result.is_err());
    }
}
