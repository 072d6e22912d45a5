//! API modules.

mod announcement;
mod auth;
mod dashboard;
mod menu;
mod reward;
mod role;
mod task;
mod theme;
mod user;

pub use announcement::{AnnouncementApi, AnnouncementListBuilder};
pub use auth::{AuthApi, LoginResponse, RegisterRequest};
pub use dashboard::{DashboardApi, UserLogListBuilder};
pub use menu::MenuApi;
pub use reward::{RewardApi, RewardListBuilder};
pub use role::RoleApi;
pub use task::{TaskApi, TaskListBuilder};
pub use theme::ThemeApi;
pub use user::{UserApi, UserListBuilder, UserPayload};
