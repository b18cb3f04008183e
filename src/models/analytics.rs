//! Analytics reads that are returned to the caller and never cached.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_date, Normalize};

/// One point of a keyword's rank history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "position")]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<i64>,
}

impl Normalize for HistoryPoint {
    fn normalize(mut self) -> Self {
        self.date = normalize_date(self.date.take());
        self
    }
}

/// Request body for a share-of-voice computation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShareOfVoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
}

/// The configured search-volume data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchVolumeSource {
    pub source: String,
}
