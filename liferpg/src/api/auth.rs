//! Auth API: login, registration, and session hydration.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    client::ClientInner,
    error::Result,
    models::{MenuItem, UserInfo},
};

/// API for authentication and session population.
pub struct AuthApi {
    client: Arc<ClientInner>,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_info: UserInfo,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl AuthApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Log in with credentials.
    ///
    /// On success the session receives the token and profile, and the
    /// token is persisted. Failures propagate unmodified; the session is
    /// left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse = self
            .client
            .post_json("auth/login", &LoginRequest { username, password })
            .await?;

        self.client
            .session
            .establish(&response.token, response.user_info.clone())
            .await;

        Ok(response)
    }

    /// Register a new account. Does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.client.post_ok("auth/register", request).await
    }

    /// Fetch the current user's profile into the session.
    ///
    /// A no-op without a token. Any failure clears the entire session
    /// before re-raising: an invalid or expired persisted token surfaces
    /// as both a cleared session and an error.
    pub async fn fetch_user_info(&self) -> Result<Option<UserInfo>> {
        if !self.client.session.is_logged_in() {
            return Ok(None);
        }

        match self.client.get_json::<UserInfo>("auth/info", &[]).await {
            Ok(user_info) => {
                self.client.session.set_user_info(user_info.clone());
                Ok(Some(user_info))
            }
            Err(err) => {
                self.client.session.logout().await;
                Err(err)
            }
        }
    }

    /// Fetch the authorized menu tree into the session.
    ///
    /// A no-op without a token. Unlike [`fetch_user_info`], a failure
    /// only resets the menus to empty and is swallowed: missing menus
    /// must not block app usage.
    ///
    /// [`fetch_user_info`]: AuthApi::fetch_user_info
    pub async fn fetch_menus(&self) -> Result<Vec<MenuItem>> {
        if !self.client.session.is_logged_in() {
            return Ok(Vec::new());
        }

        match self.client.get_list::<MenuItem>("auth/menus", &[]).await {
            Ok(menus) => {
                self.client.session.set_menus(menus.clone());
                Ok(menus)
            }
            Err(err) => {
                log::warn!("menu fetch failed, continuing without menus: {err}");
                self.client.session.set_menus(Vec::new());
                Ok(Vec::new())
            }
        }
    }

    /// Clear the session and remove the persisted token.
    pub async fn logout(&self) {
        self.client.session.logout().await;
    }
}
