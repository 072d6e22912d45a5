//! Menu management API (admin).

use std::sync::Arc;

use crate::{client::ClientInner, error::Result, models::MenuItem};

/// API for menu management.
pub struct MenuApi {
    client: Arc<ClientInner>,
}

impl MenuApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Menu tree (roots with nested children).
    pub async fn tree(&self) -> Result<Vec<MenuItem>> {
        self.client.get_list("menus", &[]).await
    }

    /// All menus as a flat list.
    pub async fn list(&self) -> Result<Vec<MenuItem>> {
        self.client.get_list("menus/all", &[]).await
    }

    /// Create a menu; returns the created record.
    pub async fn create(&self, menu: &MenuItem) -> Result<MenuItem> {
        self.client.post_json("menus", menu).await
    }

    /// Update a menu.
    pub async fn update(&self, id: u64, menu: &MenuItem) -> Result<()> {
        self.client.put_ok(&format!("menus/{id}"), menu).await
    }

    /// Delete a menu. Fails on the backend if the node has children.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("menus/{id}")).await
    }
}
