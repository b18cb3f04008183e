//! Search-console domain model.

use serde::{Deserialize, Serialize};

use crate::normalize::Normalize;

/// An external analytics domain, optionally bound to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConsoleDomain {
    pub id: i64,
    pub domain: String,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Normalize for SearchConsoleDomain {
    fn normalize(self) -> Self {
        self
    }
}

/// Request body for registering a domain.
#[derive(Debug, Clone, Serialize)]
pub struct NewSearchConsoleDomain {
    pub domain: String,
    pub project_id: i64,
}

/// Response to a domain registration.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConsoleDomainCreated {
    pub domain_id: i64,
}

/// Request body for rebinding a domain to a project.
#[derive(Debug, Clone, Serialize)]
pub struct SearchConsoleDomainUpdate {
    pub project_id: i64,
}
