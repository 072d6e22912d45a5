//! Reward (shop item) models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable reward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: i64,
    /// Remaining stock; -1 means unlimited.
    #[serde(default = "unlimited_stock")]
    pub stock: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn unlimited_stock() -> i64 {
    -1
}

impl Reward {
    /// Whether stock never runs out.
    pub fn is_unlimited(&self) -> bool {
        self.stock < 0
    }

    /// Whether the item can currently be bought.
    pub fn in_stock(&self) -> bool {
        self.stock != 0
    }
}

/// Result of purchasing a reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    pub cost: i64,
    pub new_gold: i64,
    /// Title of the purchased reward.
    pub reward: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_semantics() {
        let unlimited = Reward {
            stock: -1,
            ..Default::default()
        };
        assert!(unlimited.is_unlimited());
        assert!(unlimited.in_stock());

        let sold_out = Reward {
            stock: 0,
            ..Default::default()
        };
        assert!(!sold_out.is_unlimited());
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_purchase_outcome() {
        let json = r#"{"cost": 50, "newGold": 30, "reward": "电影票"}"#;
        let outcome: PurchaseOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.new_gold, 30);
        assert_eq!(outcome.reward, "电影票");
    }
}
