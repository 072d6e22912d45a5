//! Role management API (admin).

use serde::Serialize;
use std::sync::Arc;

use crate::{client::ClientInner, error::Result, models::Role};

/// API for role management.
pub struct RoleApi {
    client: Arc<ClientInner>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignMenusRequest<'a> {
    menu_ids: &'a [u64],
}

impl RoleApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List all roles.
    pub async fn list(&self) -> Result<Vec<Role>> {
        self.client.get_list("roles", &[]).await
    }

    /// Create a role; returns the created record.
    pub async fn create(&self, role: &Role) -> Result<Role> {
        self.client.post_json("roles", role).await
    }

    /// Update a role.
    pub async fn update(&self, id: u64, role: &Role) -> Result<()> {
        self.client.put_ok(&format!("roles/{id}"), role).await
    }

    /// Delete a role.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("roles/{id}")).await
    }

    /// Menu IDs currently assigned to a role.
    pub async fn menus(&self, id: u64) -> Result<Vec<u64>> {
        self.client.get_list(&format!("roles/{id}/menus"), &[]).await
    }

    /// Replace a role's menu assignment wholesale.
    pub async fn assign_menus(&self, id: u64, menu_ids: &[u64]) -> Result<()> {
        self.client
            .post_ok(&format!("roles/{id}/menus"), &AssignMenusRequest { menu_ids })
            .await
    }
}
