//! Tag types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TagId = i64;

/// A named label attachable to posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
