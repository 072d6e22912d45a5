//! Announcement API: admin CRUD plus the end-user feed.

use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{Announcement, Page},
};

/// API for announcement operations.
pub struct AnnouncementApi {
    client: Arc<ClientInner>,
}

impl AnnouncementApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List announcements, paged (admin).
    pub fn list(&self) -> AnnouncementListBuilder {
        AnnouncementListBuilder {
            client: self.client.clone(),
            page: 1,
            page_size: 10,
        }
    }

    /// Create an announcement; returns the created record (admin).
    pub async fn create(&self, announcement: &Announcement) -> Result<Announcement> {
        self.client.post_json("announcements", announcement).await
    }

    /// Update an announcement (admin).
    pub async fn update(&self, id: u64, announcement: &Announcement) -> Result<()> {
        self.client
            .put_ok(&format!("announcements/{id}"), announcement)
            .await
    }

    /// Delete an announcement (admin).
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("announcements/{id}")).await
    }

    /// The latest active announcements shown to end users.
    pub async fn feed(&self) -> Result<Vec<Announcement>> {
        self.client.get_list("app/announcements", &[]).await
    }
}

/// Builder for announcement list requests.
pub struct AnnouncementListBuilder {
    client: Arc<ClientInner>,
    page: u32,
    page_size: u32,
}

impl AnnouncementListBuilder {
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

    /// Execute the request.
    pub async fn send(self) -> Result<Page<Announcement>> {
        let query = [
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        self.client.get_json("announcements", &query).await
    }
}
