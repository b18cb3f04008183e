//! Keyword model.

use serde::{Deserialize, Serialize};

use crate::normalize::{deserialize_flag, flag_default, normalize_date, Normalize};

/// A search term tracked within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub project_id: i64,
    #[serde(rename = "keyword")]
    pub text: String,
    #[serde(default = "flag_default", deserialize_with = "deserialize_flag")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_volume_update: Option<String>,
    /// Ids of the tags attached to this keyword
    #[serde(default, alias = "tag_ids")]
    pub tags: Vec<i64>,
}

impl Keyword {
    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tags.contains(&tag_id)
    }

    /// Attach a tag id once.
    pub fn attach_tag(&mut self, tag_id: i64) {
        if !self.has_tag(tag_id) {
            self.tags.push(tag_id);
        }
    }

    pub fn detach_tag(&mut self, tag_id: i64) {
        self.tags.retain(|t| *t != tag_id);
    }
}

impl Normalize for Keyword {
    fn normalize(mut self) -> Self {
        self.last_volume_update = normalize_date(self.last_volume_update.take());
        self
    }
}

/// Request body for adding one keyword to a project.
#[derive(Debug, Clone, Serialize)]
pub struct NewKeyword {
    pub keyword: String,
}

/// Request body for adding many keywords at once.
#[derive(Debug, Clone, Serialize)]
pub struct NewKeywords {
    pub project_id: i64,
    pub keywords: Vec<String>,
}
