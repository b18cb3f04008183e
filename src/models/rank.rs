//! Rank entry (SERP data) model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{decode_payload, normalize_date, Normalize};

/// One observed search-result snapshot for a keyword.
///
/// Collection rows from `/rankData` carry the joined keyword and domain;
/// single-entry reads carry `full_data` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: i64,
    pub keyword_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, alias = "position")]
    pub rank: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<i64>,
}

impl Normalize for RankEntry {
    fn normalize(mut self) -> Self {
        self.date = normalize_date(self.date.take());
        self.full_data = decode_payload(self.full_data.take());
        self
    }
}

/// Result of triggering a single-keyword fetch.
///
/// Newer servers answer with the stored entry, older ones with a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SerpFetchResult {
    Entry(RankEntry),
    Ack(super::Ack),
}

impl Normalize for SerpFetchResult {
    fn normalize(self) -> Self {
        match self {
            SerpFetchResult::Entry(entry) => SerpFetchResult::Entry(entry.normalize()),
            ack => ack,
        }
    }
}

/// Optional tag filter for a project-wide fetch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SerpFetchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
}
