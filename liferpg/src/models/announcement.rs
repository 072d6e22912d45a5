//! Announcement models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Announcement category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    #[default]
    Notice,
    Activity,
    Update,
}

/// A site announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: AnnouncementKind,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
