use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::keymap::Keymap;

pub mod controls;
pub mod profile;
pub mod sidebar;

pub use profile::ProfileView;
pub use sidebar::SidebarView;

/// Views subscribed to the store
pub struct Views {
    pub sidebar: Rc<SidebarView>,
    pub profile: Rc<ProfileView>,
}

/// Render the entire application UI from the views' cached presentation
pub fn render(views: &Views, keymap: &Keymap, sidebar_width: u16, area: Rect, f: &mut Frame) {
    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    views.sidebar.render(sidebar_area, f);

    let controls_height = keymap.bindings().len() as u16 + 2;
    let [controls_area, profile_area] =
        Layout::vertical([Constraint::Length(controls_height), Constraint::Min(0)])
            .areas(main_area);
    controls::render(keymap, controls_area, f);
    views.profile.render(profile_area, f);
}
