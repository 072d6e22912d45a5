//! HTTP client and configuration.

mod http;

pub use http::{HttpConfig, DEFAULT_BASE_URL};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{
    AnnouncementApi, AuthApi, DashboardApi, MenuApi, RewardApi, RoleApi, TaskApi, ThemeApi,
    UserApi,
};
use crate::error::{Error, Result};
use crate::notify::{LogNotifier, Notifier};
use crate::session::{MemoryTokenStorage, Session};
use http::{build_client, HttpExecutor};

/// Builder for creating [`RpgClient`].
pub struct RpgClientBuilder {
    http_config: HttpConfig,
    session: Option<Arc<Session>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl std::fmt::Debug for RpgClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpgClientBuilder")
            .field("http_config", &self.http_config)
            .field("session", &self.session)
            .field("notifier", &self.notifier.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Default for RpgClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RpgClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            http_config: HttpConfig::default(),
            session: None,
            notifier: None,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    /// Attach a session context. Without one, the client starts with an
    /// empty in-memory session.
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the notification sink. Defaults to [`LogNotifier`].
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RpgClient> {
        let http_client = build_client(&self.http_config)?;
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(Session::new(Arc::new(MemoryTokenStorage::new()))));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));

        Ok(RpgClient {
            inner: Arc::new(ClientInner {
                http: http_client,
                config: self.http_config,
                session,
                notifier,
            }),
        })
    }
}

/// Internal client state, shared by all API groups.
pub(crate) struct ClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    pub session: Arc<Session>,
    pub notifier: Arc<dyn Notifier>,
}

impl ClientInner {
    fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http, &self.config, &self.session, &*self.notifier)
    }

    /// GET expecting a payload.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.executor()
            .dispatch::<T, ()>(Method::GET, path, query, None)
            .await?
            .ok_or_else(|| Error::missing("data"))
    }

    /// GET expecting a list; a `null` payload becomes an empty list.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let data = self
            .executor()
            .dispatch::<Vec<T>, ()>(Method::GET, path, query, None)
            .await?;
        Ok(data.unwrap_or_default())
    }

    /// POST with a JSON body, expecting a payload.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.executor()
            .dispatch::<T, B>(Method::POST, path, &[], Some(body))
            .await?
            .ok_or_else(|| Error::missing("data"))
    }

    /// POST with a JSON body, discarding any payload.
    pub async fn post_ok<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.executor()
            .dispatch::<serde_json::Value, B>(Method::POST, path, &[], Some(body))
            .await?;
        Ok(())
    }

    /// Bodyless POST, expecting a payload.
    pub async fn post_unit<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.executor()
            .dispatch::<T, ()>(Method::POST, path, &[], None)
            .await?
            .ok_or_else(|| Error::missing("data"))
    }

    /// Bodyless POST, discarding any payload.
    pub async fn post_unit_ok(&self, path: &str) -> Result<()> {
        self.executor()
            .dispatch::<serde_json::Value, ()>(Method::POST, path, &[], None)
            .await?;
        Ok(())
    }

    /// PUT with a JSON body, discarding any payload.
    pub async fn put_ok<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.executor()
            .dispatch::<serde_json::Value, B>(Method::PUT, path, &[], Some(body))
            .await?;
        Ok(())
    }

    /// DELETE, discarding any payload.
    pub async fn delete_ok(&self, path: &str) -> Result<()> {
        self.executor()
            .dispatch::<serde_json::Value, ()>(Method::DELETE, path, &[], None)
            .await?;
        Ok(())
    }
}

/// Life RPG API client.
///
/// Cheap to clone; all clones share the same session and connection pool.
#[derive(Clone)]
pub struct RpgClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl RpgClient {
    /// Create a new client builder.
    pub fn builder() -> RpgClientBuilder {
        RpgClientBuilder::new()
    }

    /// Get the auth API (login, register, profile, menus).
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.inner.clone())
    }

    /// Get the user management API.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.inner.clone())
    }

    /// Get the role management API.
    pub fn roles(&self) -> RoleApi {
        RoleApi::new(self.inner.clone())
    }

    /// Get the menu management API.
    pub fn menus(&self) -> MenuApi {
        MenuApi::new(self.inner.clone())
    }

    /// Get the task API (admin and task-hall variants).
    pub fn tasks(&self) -> TaskApi {
        TaskApi::new(self.inner.clone())
    }

    /// Get the reward API (admin and shop variants).
    pub fn rewards(&self) -> RewardApi {
        RewardApi::new(self.inner.clone())
    }

    /// Get the announcement API.
    pub fn announcements(&self) -> AnnouncementApi {
        AnnouncementApi::new(self.inner.clone())
    }

    /// Get the dashboard/profile/logs API.
    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(self.inner.clone())
    }

    /// Get the theme API.
    pub fn theme(&self) -> ThemeApi {
        ThemeApi::new(self.inner.clone())
    }

    /// The session context shared with this client.
    pub fn session(&self) -> &Arc<Session> {
        &self.inner.session
    }

    /// Check if the session currently holds a token.
    pub fn is_logged_in(&self) -> bool {
        self.inner.session.is_logged_in()
    }
}

impl std::fmt::Debug for RpgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpgClient")
            .field("logged_in", &self.is_logged_in())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}
