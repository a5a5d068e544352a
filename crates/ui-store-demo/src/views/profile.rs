//! User Profile View

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ui_store::{SliceWatcher, Store, UserProfileState};

#[derive(Debug, Default)]
struct ProfileViewState {
    watcher: SliceWatcher<UserProfileState>,
    updates: usize,
}

/// Profile panel, shown only while `user_profile.visible` is set
#[derive(Debug, Default)]
pub struct ProfileView {
    inner: RefCell<ProfileViewState>,
}

impl ProfileView {
    pub fn attach(store: &Store) -> Rc<Self> {
        let view = Rc::new(Self::default());
        let subscriber = Rc::clone(&view);
        store.subscribe_and_seed(move |store| subscriber.on_state_changed(store));
        view
    }

    fn on_state_changed(&self, store: &Store) {
        let profile = store.select(|state| state.user_profile.clone());
        let mut inner = self.inner.borrow_mut();
        if inner.watcher.observe(profile) {
            inner.updates += 1;
            log::debug!("Profile state CHANGED ({} updates)", inner.updates);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner
            .borrow()
            .watcher
            .last_seen()
            .is_some_and(|profile| profile.visible)
    }

    pub fn update_count(&self) -> usize {
        self.inner.borrow().updates
    }

    pub fn render(&self, area: Rect, f: &mut Frame) {
        let inner = self.inner.borrow();
        let Some(profile) = inner.watcher.last_seen().filter(|p| p.visible) else {
            return;
        };

        f.render_widget(
            Paragraph::new("Signed in").block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", profile.active_page)),
            ),
            area,
        );
    }
}
