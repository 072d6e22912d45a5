//! Mobile theme configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color scheme and branding for the mobile view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub id: u64,
    #[serde(default = "default_primary")]
    pub primary_color: String,
    #[serde(default = "default_secondary")]
    pub secondary_color: String,
    #[serde(default = "default_gold")]
    pub gold_color: String,
    #[serde(default = "default_exp")]
    pub exp_color: String,
    #[serde(default)]
    pub background_url: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_primary() -> String {
    "#1989fa".to_owned()
}

fn default_secondary() -> String {
    "#ff976a".to_owned()
}

fn default_gold() -> String {
    "#ffd700".to_owned()
}

fn default_exp() -> String {
    "#07c160".to_owned()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            id: 0,
            primary_color: default_primary(),
            secondary_color: default_secondary(),
            gold_color: default_gold(),
            exp_color: default_exp(),
            background_url: String::new(),
            logo_url: String::new(),
            updated_at: None,
        }
    }
}
