//! Tag model.

use serde::{Deserialize, Serialize};

use crate::normalize::Normalize;

/// A user-defined label attachable to many keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Normalize for Tag {
    fn normalize(self) -> Self {
        self
    }
}

/// Request body for creating a new tag.
#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    pub name: String,
}

/// Request body for assigning one tag to many keywords.
#[derive(Debug, Clone, Serialize)]
pub struct BulkTagRequest {
    pub keyword_ids: Vec<i64>,
    pub tag_id: i64,
}
