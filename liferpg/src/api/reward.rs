//! Reward API: admin CRUD plus the end-user shop.

use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{Page, PurchaseOutcome, Reward},
};

/// API for reward operations.
pub struct RewardApi {
    client: Arc<ClientInner>,
}

impl RewardApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List configured rewards, paged (admin).
    pub fn list(&self) -> RewardListBuilder {
        RewardListBuilder {
            client: self.client.clone(),
            page: 1,
            page_size: 10,
        }
    }

    /// Create a reward; returns the created record (admin).
    pub async fn create(&self, reward: &Reward) -> Result<Reward> {
        self.client.post_json("rewards", reward).await
    }

    /// Update a reward (admin).
    pub async fn update(&self, id: u64, reward: &Reward) -> Result<()> {
        self.client.put_ok(&format!("rewards/{id}"), reward).await
    }

    /// Delete a reward (admin).
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("rewards/{id}")).await
    }

    /// Active rewards visible in the shop.
    pub async fn shop(&self) -> Result<Vec<Reward>> {
        self.client.get_list("app/rewards", &[]).await
    }

    /// Purchase a reward, spending gold.
    ///
    /// On success the session profile's gold balance is updated in place.
    pub async fn purchase(&self, id: u64) -> Result<PurchaseOutcome> {
        let outcome: PurchaseOutcome = self
            .client
            .post_unit(&format!("app/rewards/{id}/purchase"))
            .await?;

        let session = &self.client.session;
        session.update_user_stats(outcome.new_gold, session.exp(), session.level());

        Ok(outcome)
    }
}

/// Builder for reward list requests.
pub struct RewardListBuilder {
    client: Arc<ClientInner>,
    page: u32,
    page_size: u32,
}

impl RewardListBuilder {
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
    pub async fn send(self) -> Result<Page<Reward>> {
        let query = [
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        self.client.get_json("rewards", &query).await
    }
}
