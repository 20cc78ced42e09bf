//! Category domain model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of a question category.
pub type CategoryId = i64;

/// Read-only question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display label. Serialized as `type` to match the wire format.
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

/// Builds the `id -> type` mapping returned by listing endpoints.
pub fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}
