// ABOUTME: Todo type definitions
// ABOUTME: Entity and input structures for todo records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "isComplete")]
    pub is_complete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCreateInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "isComplete")]
    pub is_complete: Option<bool>,
}

/// Partial update: `Some` overrides the stored value, `None` preserves it.
/// A JSON `null` deserializes to `None` and therefore also preserves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "isComplete")]
    pub is_complete: Option<bool>,
}
