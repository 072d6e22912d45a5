//! Dashboard API: admin stats, end-user profile and ledger.

use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{DashboardStats, LogKind, Page, UserLog, UserProfile},
};

/// API for dashboard, profile and ledger queries.
pub struct DashboardApi {
    client: Arc<ClientInner>,
}

impl DashboardApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Aggregate counters and 7-day series (admin).
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.client.get_json("dashboard/stats", &[]).await
    }

    /// The caller's profile with level progression.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get_json("app/profile", &[]).await
    }

    /// The caller's gold/exp ledger, paged, optionally filtered by kind.
    pub fn logs(&self) -> UserLogListBuilder {
        UserLogListBuilder {
            client: self.client.clone(),
            page: 1,
            page_size: 20,
            kind: None,
        }
    }
}

/// Builder for ledger list requests.
pub struct UserLogListBuilder {
    client: Arc<ClientInner>,
    page: u32,
    page_size: u32,
    kind: Option<LogKind>,
}

impl UserLogListBuilder {
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

    /// Filter by entry kind.
    pub fn kind(mut self, kind: LogKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Page<UserLog>> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_owned()));
        }

        self.client.get_json("app/logs", &query).await
    }
}
