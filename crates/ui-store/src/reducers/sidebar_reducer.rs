//! Sidebar Reducer

use crate::actions::{Action, ActionType};
use crate::state::SidebarState;

/// Reduce sidebar state
///
/// A `SidebarChangeActivePage` without a text payload changes nothing.
pub fn reduce(mut state: SidebarState, action: &Action) -> SidebarState {
    match action.kind {
        ActionType::SidebarChangeActivePage => match action.payload.as_text() {
            Some(page) => {
                state.active_page = page.to_string();
                log::debug!("Sidebar active page is now {:?}", state.active_page);
            }
            None => {
                log::warn!(
                    "Ignoring {}: expected a text payload, got {:?}",
                    action.kind,
                    action.payload
                );
            }
        },
        ActionType::UserProfileShow | ActionType::UserProfileHide => {}
    }
    state
}
