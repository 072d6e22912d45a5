//! User management API (admin).

use serde::Serialize;
use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{Page, UserInfo},
};

/// API for user management.
pub struct UserApi {
    client: Arc<ClientInner>,
}

/// Create/update payload for a user.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    /// Empty on create means the backend default password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    pub role_id: u64,
    pub status: i32,
}

impl UserApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List users, paged, optionally filtered by username substring.
    pub fn list(&self) -> UserListBuilder {
        UserListBuilder {
            client: self.client.clone(),
            page: 1,
            page_size: 10,
            username: None,
        }
    }

    /// Create a user; returns the created record.
    pub async fn create(&self, user: &UserPayload) -> Result<UserInfo> {
        self.client.post_json("users", user).await
    }

    /// Update a user.
    pub async fn update(&self, id: u64, user: &UserPayload) -> Result<()> {
        self.client.put_ok(&format!("users/{id}"), user).await
    }

    /// Delete a user.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("users/{id}")).await
    }

    /// Reset a user's password to the backend default.
    pub async fn reset_password(&self, id: u64) -> Result<()> {
        self.client
            .post_unit_ok(&format!("users/{id}/reset-password"))
            .await
    }
}

/// Builder for user list requests.
pub struct UserListBuilder {
    client: Arc<ClientInner>,
    page: u32,
    page_size: u32,
    username: Option<String>,
}

impl UserListBuilder {
    /// Set the page number (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Filter by username substring.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Page<UserInfo>> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(username) = &self.username {
            query.push(("username", username.clone()));
        }

        self.client.get_json("users", &query).await
    }
}
