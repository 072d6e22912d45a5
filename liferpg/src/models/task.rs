//! Task models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task repetition kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Completable once per day.
    #[default]
    Daily,
    /// Completable once, ever.
    Once,
}

impl TaskKind {
    /// Query-string value for list filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Daily => "daily",
            TaskKind::Once => "once",
        }
    }
}

/// A configured task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gold_reward: i64,
    #[serde(default)]
    pub exp_reward: i64,
    #[serde(rename = "type", default)]
    pub kind: TaskKind,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A task as seen from the task hall, with the caller's completion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    #[serde(flatten)]
    pub task: Task,
    pub completed: bool,
}

/// Rewards granted by completing a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutcome {
    pub gold_reward: i64,
    pub exp_reward: i64,
    pub new_gold: i64,
    pub new_exp: i64,
    pub new_level: i32,
    pub level_up: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(serde_json::to_string(&TaskKind::Daily).unwrap(), r#""daily""#);
        let kind: TaskKind = serde_json::from_str(r#""once""#).unwrap();
        assert_eq!(kind, TaskKind::Once);
    }

    #[test]
    fn test_entry_flatten() {
        let json = r#"{
            "id": 3, "title": "晨跑", "description": "", "goldReward": 10,
            "expReward": 20, "type": "daily", "category": "健康", "icon": "",
            "isActive": true, "sort": 0, "completed": true
        }"#;
        let entry: TaskEntry = serde_json::from_str(json).unwrap();
        assert!(entry.completed);
        assert_eq!(entry.task.title, "晨跑");
        assert_eq!(entry.task.kind, TaskKind::Daily);
    }

    #[test]
    fn test_outcome_shape() {
        let json = r#"{
            "goldReward": 10, "expReward": 20, "newGold": 110,
            "newExp": 120, "newLevel": 2, "levelUp": true
        }"#;
        let outcome: TaskOutcome = serde_json::from_str(json).unwrap();
        assert!(outcome.level_up);
        assert_eq!(outcome.new_level, 2);
    }
}
