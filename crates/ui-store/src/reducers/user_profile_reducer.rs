//! User Profile Reducer

use crate::actions::{Action, ActionType};
use crate::state::UserProfileState;

/// Reduce user profile state. Payloads are ignored.
pub fn reduce(mut state: UserProfileState, action: &Action) -> UserProfileState {
    match action.kind {
        ActionType::UserProfileShow => {
            state.visible = true;
            log::debug!("User profile is now visible");
        }
        ActionType::UserProfileHide => {
            state.visible = false;
            log::debug!("User profile is now hidden");
        }
        ActionType::SidebarChangeActivePage => {}
    }
    state
}
