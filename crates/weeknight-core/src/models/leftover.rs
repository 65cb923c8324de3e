//! Leftover records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Uneaten servings recorded after a cooking session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leftover {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,

    pub recipe_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,

    /// Number of servings left
    pub servings: u32,

    /// After this instant the leftover should be thrown out
    pub safe_until: Timestamp,

    /// Suggested way to reuse the leftover (e.g. "fried rice")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,

    #[serde(default)]
    pub is_consumed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_at: Option<Timestamp>,

    pub created_at: Timestamp,
}

impl Leftover {
    /// Whether the leftover is past its safe window at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.safe_until
    }
}
