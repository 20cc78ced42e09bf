//! `POST /quizzes` body parsing.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use trivia_core::{CategoryId, QuestionId, QuizScope, ServiceError, ServiceResult};

/// `quiz_category.type` values that select every category.
///
/// `click` is what the existing web client sends for "ALL".
pub const ALL_CATEGORIES_SENTINELS: &[&str] = &["click", "any"];

/// Raw quiz request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategoryInput>,
}

/// Client-side category selector: `{"type": "...", "id": 1 | "1"}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizCategoryInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<Value>,
}

impl QuizRequest {
    /// Parses a JSON body. Malformed input is `BadRequest`.
    pub fn parse(body: &str) -> ServiceResult<Self> {
        serde_json::from_str(body).map_err(|err| ServiceError::BadRequest(err.to_string()))
    }

    /// Previously served ids; absent means none.
    pub fn previous_ids(&self) -> BTreeSet<QuestionId> {
        self.previous_questions
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Resolves the selector. `Ok(None)` when no selector was sent or it is
    /// empty (`{}`, blank `type` and no `id`).
    pub fn scope(&self) -> ServiceResult<Option<QuizScope>> {
        let Some(category) = self
            .quiz_category
            .as_ref()
            .filter(|category| !category.is_empty())
        else {
            return Ok(None);
        };

        if ALL_CATEGORIES_SENTINELS.contains(&category.kind.as_str()) {
            return Ok(Some(QuizScope::All));
        }

        category
            .id
            .as_ref()
            .and_then(parse_category_id)
            .map(|id| Some(QuizScope::Category(id)))
            .ok_or_else(|| {
                ServiceError::BadRequest(format!(
                    "quiz_category `{}` has no usable id",
                    category.kind
                ))
            })
    }
}

impl QuizCategoryInput {
    fn is_empty(&self) -> bool {
        self.kind.trim().is_empty() && self.id.is_none()
    }
}

fn parse_category_id(value: &Value) -> Option<CategoryId> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
