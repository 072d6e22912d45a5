//! User and role models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role key that grants access to the admin console.
pub const ADMIN_ROLE_KEY: &str = "admin";

/// A system user: identity plus game stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role_id: u64,
    /// Loaded role, absent on some list payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub exp: i64,
    #[serde(default = "default_level")]
    pub level: i32,
    /// 1 active, 0 disabled.
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_level() -> i32 {
    1
}

impl UserInfo {
    /// Whether this profile carries the admin role key.
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().map(|r| r.key == ADMIN_ROLE_KEY).unwrap_or(false)
    }

    /// Display name: nickname if set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.username
        } else {
            &self.nickname
        }
    }
}

/// A system role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub remark: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let mut user = UserInfo::default();
        assert!(!user.is_admin());

        user.role = Some(Role {
            key: "user".into(),
            ..Default::default()
        });
        assert!(!user.is_admin());

        user.role = Some(Role {
            key: "admin".into(),
            ..Default::default()
        });
        assert!(user.is_admin());
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": 1,
            "username": "admin",
            "nickname": "管理员",
            "avatar": "",
            "roleId": 1,
            "role": {"id": 1, "name": "管理员", "key": "admin", "sort": 0, "status": 1, "remark": ""},
            "gold": 100,
            "exp": 250,
            "level": 2,
            "status": 1,
            "createdAt": "2024-01-01T00:00:00+08:00",
            "updatedAt": "2024-01-02T00:00:00+08:00"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.gold, 100);
        assert_eq!(user.level, 2);
        assert!(user.is_admin());
    }

    #[test]
    fn test_display_name() {
        let user = UserInfo {
            username: "bob".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "bob");

        let user = UserInfo {
            username: "bob".into(),
            nickname: "Bobby".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Bobby");
    }
}
