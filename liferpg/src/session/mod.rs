//! Session context: who is using the app right now.

mod storage;

pub use storage::{MemoryTokenStorage, TokenStorage};

use std::sync::{Arc, RwLock};

use crate::models::{MenuItem, UserInfo};

/// Token, profile and authorized menu tree for the current actor.
///
/// Constructed once by the application root and shared (`Arc`) into the
/// HTTP layer and the router; there is no hidden global. An empty token is
/// equivalent to "not logged in". The profile is held only while logged
/// in; the menu tree is rebuilt fresh per authenticated session, never
/// merged.
pub struct Session {
    token: RwLock<String>,
    user_info: RwLock<Option<UserInfo>>,
    menus: RwLock<Vec<MenuItem>>,
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    /// Create an empty session backed by the given storage.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            token: RwLock::new(String::new()),
            user_info: RwLock::new(None),
            menus: RwLock::new(Vec::new()),
            storage,
        }
    }

    /// Create a session, reading the persisted token once.
    ///
    /// The profile and menus are not restored; the navigation guard
    /// hydrates them on the first authenticated navigation.
    pub async fn restore(storage: Arc<dyn TokenStorage>) -> Self {
        let session = Self::new(storage);
        if let Some(token) = session.storage.load().await {
            *session.token.write().unwrap() = token;
        }
        session
    }

    /// Current token; empty means absent.
    pub fn token(&self) -> String {
        self.token.read().unwrap().clone()
    }

    /// Current profile, if loaded.
    pub fn user_info(&self) -> Option<UserInfo> {
        self.user_info.read().unwrap().clone()
    }

    /// Current menu tree.
    pub fn menus(&self) -> Vec<MenuItem> {
        self.menus.read().unwrap().clone()
    }

    /// True iff the token is a non-empty string.
    pub fn is_logged_in(&self) -> bool {
        !self.token.read().unwrap().is_empty()
    }

    /// True iff the loaded profile carries the admin role key.
    pub fn is_admin(&self) -> bool {
        self.user_info
            .read()
            .unwrap()
            .as_ref()
            .map(UserInfo::is_admin)
            .unwrap_or(false)
    }

    /// Username of the loaded profile, empty when absent.
    pub fn username(&self) -> String {
        self.user_info
            .read()
            .unwrap()
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    /// Gold balance, 0 when no profile is loaded.
    pub fn gold(&self) -> i64 {
        self.user_info.read().unwrap().as_ref().map(|u| u.gold).unwrap_or(0)
    }

    /// Experience, 0 when no profile is loaded.
    pub fn exp(&self) -> i64 {
        self.user_info.read().unwrap().as_ref().map(|u| u.exp).unwrap_or(0)
    }

    /// Level, 1 when no profile is loaded.
    pub fn level(&self) -> i32 {
        self.user_info.read().unwrap().as_ref().map(|u| u.level).unwrap_or(1)
    }

    /// Overwrite the held profile's stats in place. No network call; a
    /// no-op when no profile is loaded.
    pub fn update_user_stats(&self, gold: i64, exp: i64, level: i32) {
        if let Some(user) = self.user_info.write().unwrap().as_mut() {
            user.gold = gold;
            user.exp = exp;
            user.level = level;
        }
    }

    /// Clear token, profile and menus, and remove the persisted token.
    pub async fn logout(&self) {
        self.token.write().unwrap().clear();
        *self.user_info.write().unwrap() = None;
        self.menus.write().unwrap().clear();
        self.storage.remove().await;
    }

    /// Store a fresh token + profile and persist the token.
    pub(crate) async fn establish(&self, token: &str, user_info: UserInfo) {
        *self.token.write().unwrap() = token.to_owned();
        *self.user_info.write().unwrap() = Some(user_info);
        self.storage.store(token).await;
    }

    pub(crate) fn set_user_info(&self, user_info: UserInfo) {
        *self.user_info.write().unwrap() = Some(user_info);
    }

    pub(crate) fn set_menus(&self, menus: Vec<MenuItem>) {
        *self.menus.write().unwrap() = menus;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .field("username", &self.username())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn admin_profile() -> UserInfo {
        UserInfo {
            id: 1,
            username: "admin".into(),
            gold: 100,
            exp: 250,
            level: 2,
            role: Some(Role {
                key: "admin".into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_logged_in_tracks_token() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        assert!(!session.is_logged_in());

        session.establish("abc", admin_profile()).await;
        assert!(session.is_logged_in());

        session.logout().await;
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), "");
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_token() {
        let storage = Arc::new(MemoryTokenStorage::with_token("persisted"));
        let session = Session::restore(storage).await;
        assert!(session.is_logged_in());
        assert_eq!(session.token(), "persisted");
        // profile is not restored, only the token
        assert!(session.user_info().is_none());
    }

    #[tokio::test]
    async fn test_is_admin_requires_profile() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        assert!(!session.is_admin());

        session.set_user_info(admin_profile());
        assert!(session.is_admin());

        let mut user = admin_profile();
        user.role = None;
        session.set_user_info(user);
        assert!(!session.is_admin());
    }

    #[tokio::test]
    async fn test_projections_have_defaults() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        assert_eq!(session.username(), "");
        assert_eq!(session.gold(), 0);
        assert_eq!(session.exp(), 0);
        assert_eq!(session.level(), 1);
    }

    #[tokio::test]
    async fn test_update_user_stats() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));

        // no profile loaded: a no-op
        session.update_user_stats(10, 20, 1);
        assert_eq!(session.gold(), 0);

        session.set_user_info(admin_profile());
        session.update_user_stats(150, 300, 3);
        assert_eq!(session.gold(), 150);
        assert_eq!(session.exp(), 300);
        assert_eq!(session.level(), 3);
    }

    #[tokio::test]
    async fn test_logout_removes_persisted_token() {
        let storage = Arc::new(MemoryTokenStorage::with_token("abc"));
        let session = Session::restore(storage.clone()).await;
        session.logout().await;
        assert_eq!(storage.load().await, None);
    }
}
