//! Quiz selection scope.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};

/// Which questions a quiz round may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "id")]
pub enum QuizScope {
    /// Every question in the bank.
    All,
    /// Only questions of one category.
    Category(CategoryId),
}

impl QuizScope {
    /// Returns whether a question of `category` is in scope.
    pub fn admits(&self, category: CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => *id == category,
        }
    }
}
