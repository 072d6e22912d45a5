//! Dashboard, profile and ledger models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Gold produced on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyGoldStat {
    pub date: String,
    pub gold: i64,
}

/// Tasks completed on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTaskStat {
    pub date: String,
    pub count: i64,
}

/// Aggregate counters for the admin dashboard, with 7-day series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub user_count: i64,
    #[serde(default)]
    pub today_gold: i64,
    #[serde(default)]
    pub today_tasks: i64,
    #[serde(default)]
    pub active_task_count: i64,
    #[serde(default)]
    pub active_reward_count: i64,
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub daily_gold_stats: Vec<DailyGoldStat>,
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub daily_task_stats: Vec<DailyTaskStat>,
}

/// End-user profile with level progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user: UserInfo,
    pub next_level_exp: i64,
    pub exp_progress: i64,
    pub exp_percentage: f64,
}

/// Ledger entry direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    GoldIn,
    GoldOut,
    ExpIn,
}

impl LogKind {
    /// Query-string value for list filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::GoldIn => "gold_in",
            LogKind::GoldOut => "gold_out",
            LogKind::ExpIn => "exp_in",
        }
    }
}

/// One gold/exp ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLog {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub amount: i64,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ref_type: String,
    #[serde(default)]
    pub ref_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
