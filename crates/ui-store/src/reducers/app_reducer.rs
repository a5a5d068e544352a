use crate::actions::{Action, ActionType};
use crate::reducers::{sidebar_reducer, user_profile_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action.kind {
        ActionType::SidebarChangeActivePage => {
            state.sidebar = sidebar_reducer::reduce(state.sidebar, action);
        }
        ActionType::UserProfileShow | ActionType::UserProfileHide => {
            state.user_profile = user_profile_reducer::reduce(state.user_profile, action);
        }
    }

    state
}
