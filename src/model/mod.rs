//! # Trivia Records
//!
//! Category and question records as stored and as served over the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Question identifier
pub type QuestionId = i64;

/// Category identifier
pub type CategoryId = i64;

/// Lowest accepted difficulty
pub const MIN_DIFFICULTY: i64 = 1;

/// Highest accepted difficulty
pub const MAX_DIFFICULTY: i64 = 4;

/// A named grouping of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// A stored trivia question
///
/// Serializes to the formatted record `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: CategoryId,
}

/// A question that has passed validation but has no id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: CategoryId,
}

impl NewQuestion {
    /// Build a new question, rejecting empty text and out-of-range difficulty.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category: CategoryId,
    ) -> Result<Self, InvalidQuestion> {
        let candidate = Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            category,
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// Check field-level constraints
    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        if self.question.trim().is_empty() {
            return Err(InvalidQuestion::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(InvalidQuestion::EmptyAnswer);
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(InvalidQuestion::DifficultyOutOfRange(self.difficulty));
        }
        Ok(())
    }

    /// Attach an assigned id
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Field-level validation failures for a new question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    #[error("question text must not be empty")]
    EmptyQuestion,

    #[error("answer text must not be empty")]
    EmptyAnswer,

    #[error("difficulty {0} is outside 1..=4")]
    DifficultyOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_formats_as_flat_record() {
        let q = Question {
            id: 7,
            question: "Who painted the Mona Lisa?".to_string(),
            answer: "Leonardo da Vinci".to_string(),
            difficulty: 2,
            category: 2,
        };

        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "question": "Who painted the Mona Lisa?",
                "answer": "Leonardo da Vinci",
                "difficulty": 2,
                "category": 2
            })
        );
    }

    #[test]
    fn test_category_serializes_type_field() {
        let value = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(value["type"], "Science");
    }

    #[test]
    fn test_new_question_validation() {
        assert!(NewQuestion::new("Q", "A", 1, 1).is_ok());
        assert!(NewQuestion::new("Q", "A", 4, 1).is_ok());
        assert_eq!(
            NewQuestion::new("  ", "A", 1, 1),
            Err(InvalidQuestion::EmptyQuestion)
        );
        assert_eq!(
            NewQuestion::new("Q", "", 1, 1),
            Err(InvalidQuestion::EmptyAnswer)
        );
        assert_eq!(
            NewQuestion::new("Q", "A", 0, 1),
            Err(InvalidQuestion::DifficultyOutOfRange(0))
        );
        assert_eq!(
            NewQuestion::new("Q", "A", 5, 1),
            Err(InvalidQuestion::DifficultyOutOfRange(5))
        );
    }
}
