//! CLI command definitions and handlers.

pub mod announcement;
pub mod auth;
pub mod dashboard;
pub mod menu;
pub mod reward;
pub mod role;
pub mod task;
pub mod theme;
pub mod user;
