//! Application State

use super::{SidebarState, UserProfileState};

/// Application state
///
/// Always fully populated: every slice has a default, so a store is valid
/// before the first action is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub sidebar: SidebarState,
    pub user_profile: UserProfileState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state() {
        let state = AppState::default();
        assert_eq!(state.sidebar.active_page, "chatList");
        assert_eq!(state.sidebar.header_component, "ChatHeader");
        assert!(!state.user_profile.visible);
        assert_eq!(state.user_profile.active_page, "UserProfile");
    }

    #[test]
    fn test_slices_compare_independently() {
        let mut changed = AppState::default();
        changed.user_profile.visible = true;

        let initial = AppState::default();
        assert_ne!(initial, changed);
        assert_eq!(initial.sidebar, changed.sidebar);
    }
}
