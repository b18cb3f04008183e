//! Project model.

use serde::{Deserialize, Serialize};

use crate::normalize::{deserialize_flag, flag_default, Normalize};

/// A tracked website whose keywords are monitored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub domain: String,
    #[serde(default = "flag_default", deserialize_with = "deserialize_flag")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branded_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_value: Option<f64>,
}

impl Normalize for Project {
    fn normalize(self) -> Self {
        self
    }
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branded_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_value: Option<f64>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            ..Default::default()
        }
    }
}

/// Request body for updating an existing project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branded_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_value: Option<f64>,
}
