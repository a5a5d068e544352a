//! Application State Module
//!
//! Contains all state types held by the store, organized by slice.

mod app;
mod sidebar;
mod user_profile;

pub use app::AppState;
pub use sidebar::{SidebarState, BUG_SIDEBAR, CHAT_HEADER, CHAT_LIST, FILES_SIDEBAR};
pub use user_profile::{UserProfileState, USER_PROFILE};
