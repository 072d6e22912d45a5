//! Data models for Life RPG entities.

mod announcement;
mod dashboard;
mod menu;
mod page;
mod reward;
mod task;
mod theme;
mod user;

pub use announcement::{Announcement, AnnouncementKind};
pub use dashboard::{DailyGoldStat, DailyTaskStat, DashboardStats, LogKind, UserLog, UserProfile};
pub use menu::MenuItem;
pub use page::Page;
pub use reward::{PurchaseOutcome, Reward};
pub use task::{Task, TaskEntry, TaskKind, TaskOutcome};
pub use theme::ThemeConfig;
pub use user::{Role, UserInfo, ADMIN_ROLE_KEY};

use serde::{Deserialize, Deserializer};

/// The backend serializes empty Go slices as `null`; map that to `T::default()`.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
