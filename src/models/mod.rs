//! Data models for the rank tracker API.
//!
//! Entity structs mirror the server's JSON rows; request structs are the
//! bodies the client sends.

mod analytics;
mod gsc;
mod keyword;
mod project;
mod rank;
mod schedule;
mod tag;

pub use analytics::*;
pub use gsc::*;
pub use keyword::*;
pub use project::*;
pub use rank::*;
pub use schedule::*;
pub use tag::*;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement returned by trigger endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
