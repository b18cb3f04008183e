//! Schedule model.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_date, Normalize};

/// A recurring or one-off trigger of a rank fetch for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub project_id: i64,
    /// Cadence spec, e.g. `daily` or `weekly`
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
    #[serde(default)]
    pub next_run: Option<String>,
    #[serde(default)]
    pub last_run: Option<String>,
}

impl Normalize for Schedule {
    fn normalize(mut self) -> Self {
        self.next_run = normalize_date(self.next_run.take());
        self.last_run = normalize_date(self.last_run.take());
        self
    }
}

/// Request body for creating a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct NewSchedule {
    pub project_id: i64,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
}
