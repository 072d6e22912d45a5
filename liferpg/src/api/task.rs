//! Task API: admin CRUD plus the end-user task hall.

use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{Page, Task, TaskEntry, TaskKind, TaskOutcome},
};

/// API for task operations.
pub struct TaskApi {
    client: Arc<ClientInner>,
}

impl TaskApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List configured tasks, paged, optionally filtered by kind (admin).
    pub fn list(&self) -> TaskListBuilder {
        TaskListBuilder {
            client: self.client.clone(),
            page: 1,
            page_size: 10,
            kind: None,
        }
    }

    /// Create a task; returns the created record (admin).
    pub async fn create(&self, task: &Task) -> Result<Task> {
        self.client.post_json("tasks", task).await
    }

    /// Update a task (admin).
    pub async fn update(&self, id: u64, task: &Task) -> Result<()> {
        self.client.put_ok(&format!("tasks/{id}"), task).await
    }

    /// Delete a task (admin).
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete_ok(&format!("tasks/{id}")).await
    }

    /// Active tasks with the caller's completion state (task hall).
    pub async fn hall(&self) -> Result<Vec<TaskEntry>> {
        self.client.get_list("app/tasks", &[]).await
    }

    /// Complete a task and collect its rewards.
    ///
    /// On success the session profile's gold/exp/level are updated in
    /// place from the returned outcome.
    pub async fn complete(&self, id: u64) -> Result<TaskOutcome> {
        let outcome: TaskOutcome = self
            .client
            .post_unit(&format!("app/tasks/{id}/complete"))
            .await?;

        self.client
            .session
            .update_user_stats(outcome.new_gold, outcome.new_exp, outcome.new_level);

        Ok(outcome)
    }
}

/// Builder for task list requests.
pub struct TaskListBuilder {
    client: Arc<ClientInner>,
    page: u32,
    page_size: u32,
    kind: Option<TaskKind>,
}

impl TaskListBuilder {
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

    /// Filter by task kind.
    pub fn kind(mut self, kind: TaskKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Page<Task>> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_owned()));
        }

        self.client.get_json("tasks", &query).await
    }
}
