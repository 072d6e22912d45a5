//! Theme API.

use std::sync::Arc;

use crate::{client::ClientInner, error::Result, models::ThemeConfig};

/// API for the mobile theme configuration.
pub struct ThemeApi {
    client: Arc<ClientInner>,
}

impl ThemeApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Current theme. Public: served without authentication.
    pub async fn get(&self) -> Result<ThemeConfig> {
        self.client.get_json("theme", &[]).await
    }

    /// Replace the theme (admin).
    pub async fn update(&self, theme: &ThemeConfig) -> Result<()> {
        self.client.put_ok("theme", theme).await
    }
}
