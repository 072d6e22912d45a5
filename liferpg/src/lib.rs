//! Rust client library for the Life RPG gamified task tracker.

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod notify;
pub mod router;
pub mod session;

// Re-export main types
pub use client::{HttpConfig, RpgClient, RpgClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use notify::{LogNotifier, Notifier};
pub use router::{Decision, Navigation, Router};
pub use session::{MemoryTokenStorage, Session, TokenStorage};

// Re-export commonly used models
pub use models::{
    Announcement, AnnouncementKind, DashboardStats, LogKind, MenuItem, Page, PurchaseOutcome,
    Reward, Role, Task, TaskEntry, TaskKind, TaskOutcome, ThemeConfig, UserInfo, UserLog,
    UserProfile, ADMIN_ROLE_KEY,
};

// Re-export API types
pub use api::{LoginResponse, RegisterRequest};
