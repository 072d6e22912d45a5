//! Durable token storage.

use async_trait::async_trait;
use std::sync::RwLock;

/// Trait for durable token storage backends.
///
/// A single key holding the raw token string: written on login, removed on
/// logout, read once when the session is restored at startup.
#[async_trait]
pub trait TokenStorage: Send + Sync + std::fmt::Debug {
    /// Read the persisted token, if any.
    async fn load(&self) -> Option<String>;

    /// Persist the token.
    async fn store(&self, token: &str);

    /// Remove the persisted token.
    async fn remove(&self);
}

/// In-memory token storage.
///
/// Keeps the session scoped to the process, which matches a browser tab;
/// also the default for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    async fn store(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_owned());
    }

    async fn remove(&self) {
        *self.token.write().unwrap() = None;
    }
}
