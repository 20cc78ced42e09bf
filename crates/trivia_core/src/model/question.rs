//! Question domain model.
//!
//! # Responsibility
//! - Define the persisted `Question` record and the `NewQuestion` write model.
//! - Validate new questions before any store mutation.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `question` and `answer` are non-blank.
//! - `category` and `difficulty` are positive.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned question identifier.
pub type QuestionId = i64;

/// Persisted trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    /// Ordinal difficulty, 1 is easiest.
    pub difficulty: i64,
}

/// Question content before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Validation failures for question write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    BlankQuestion,
    BlankAnswer,
    InvalidCategory(CategoryId),
    InvalidDifficulty(i64),
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankQuestion => write!(f, "question text cannot be blank"),
            Self::BlankAnswer => write!(f, "answer text cannot be blank"),
            Self::InvalidCategory(id) => write!(f, "invalid category id {id}"),
            Self::InvalidDifficulty(value) => {
                write!(f, "difficulty must be a positive integer, got {value}")
            }
        }
    }
}

impl Error for QuestionValidationError {}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Checks content invariants. Does not check that `category` exists.
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        if self.question.trim().is_empty() {
            return Err(QuestionValidationError::BlankQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(QuestionValidationError::BlankAnswer);
        }
        if self.category <= 0 {
            return Err(QuestionValidationError::InvalidCategory(self.category));
        }
        if self.difficulty <= 0 {
            return Err(QuestionValidationError::InvalidDifficulty(self.difficulty));
        }
        Ok(())
    }

    /// Attaches a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
