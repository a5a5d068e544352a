use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::actions::Action;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use crate::subscription::{Subscribers, SubscriptionId};

/// Store - holds application state and manages the dispatch/reduce/notify loop
///
/// The store is the only writer of [`AppState`]. Create one at the
/// composition root and hand out references to it. It is single-threaded
/// (`!Sync`); callers that dispatch from several threads must serialize
/// access themselves.
pub struct Store {
    state: RefCell<AppState>,
    subscribers: RefCell<Subscribers>,
    dispatch_count: Cell<u64>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: RefCell::new(initial_state),
            subscribers: RefCell::new(Subscribers::default()),
            dispatch_count: Cell::new(0),
        }
    }

    /// Get a snapshot of the current state
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Read part of the current state without cloning the whole tree
    ///
    /// `f` must not dispatch.
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Apply an action, then notify every subscriber
    ///
    /// Subscribers are notified even when the action changed nothing; deciding
    /// whether to re-render is up to them. All handlers have run when this
    /// returns.
    pub fn dispatch(&self, action: Action) {
        log::debug!("Action: {:?}", action);

        let next = reduce(self.state(), &action);
        *self.state.borrow_mut() = next;
        self.dispatch_count.set(self.dispatch_count.get() + 1);

        // Snapshot first so handlers may (un)subscribe or dispatch again
        let handlers = self.subscribers.borrow().snapshot();
        log::trace!("Notifying {} subscribers", handlers.len());
        for handler in handlers {
            handler(self);
        }
    }

    /// Register a change handler, called after every dispatch
    ///
    /// The handler gets no payload and no diff, only the store it is
    /// registered with. It pulls whatever it needs via [`Store::state`] or
    /// [`Store::select`]. Handlers registered while a notification is being
    /// delivered are first called on the next dispatch.
    pub fn subscribe(&self, handler: impl Fn(&Store) + 'static) -> SubscriptionId {
        let id = self.subscribers.borrow_mut().insert(Rc::new(handler));
        log::debug!("Subscriber {} registered", id);
        id
    }

    /// Register a change handler and run it once right away, so the
    /// subscriber starts out in sync with the current state
    pub fn subscribe_and_seed(&self, handler: impl Fn(&Store) + 'static) -> SubscriptionId {
        let handler: Rc<dyn Fn(&Store)> = Rc::new(handler);
        let id = self.subscribers.borrow_mut().insert(Rc::clone(&handler));
        log::debug!("Subscriber {} registered", id);
        handler(self);
        id
    }

    /// Remove a change handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.borrow_mut().remove(id);
        if removed {
            log::debug!("Subscriber {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Number of actions dispatched so far
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count.get()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .field("dispatch_count", &self.dispatch_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionType;
    use crate::watcher::SliceWatcher;

    /// Counts notifications
    fn counter(store: &Store) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        store.subscribe(move |_| seen.set(seen.get() + 1));
        count
    }

    /// Sidebar stand-in that only "re-renders" when its page changes
    struct MockSidebar {
        watcher: RefCell<SliceWatcher<String>>,
        ui_updates: Cell<usize>,
    }

    impl MockSidebar {
        fn attach(store: &Store) -> Rc<Self> {
            let sidebar = Rc::new(Self {
                watcher: RefCell::new(SliceWatcher::new()),
                ui_updates: Cell::new(0),
            });
            let view = Rc::clone(&sidebar);
            store.subscribe_and_seed(move |store| view.on_state_changed(store));
            sidebar
        }

        fn on_state_changed(&self, store: &Store) {
            let page = store.select(|state| state.sidebar.active_page.clone());
            if self.watcher.borrow_mut().observe(page) {
                self.ui_updates.set(self.ui_updates.get() + 1);
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let store = Store::default();
        let state = store.state();
        assert_eq!(state.sidebar.active_page, "chatList");
        assert_eq!(state.sidebar.header_component, "ChatHeader");
        assert!(!state.user_profile.visible);
        assert_eq!(state.user_profile.active_page, "UserProfile");
        assert_eq!(store.dispatch_count(), 0);
    }

    #[test]
    fn test_targeted_mutation() {
        let store = Store::default();
        let before = store.state();

        store.dispatch(Action::sidebar_change_active_page("filesSidebar"));

        let after = store.state();
        assert_eq!(after.sidebar.active_page, "filesSidebar");
        assert_eq!(after.user_profile, before.user_profile);
    }

    #[test]
    fn test_no_op_dispatch_still_notifies() {
        let store = Store::default();
        let notifications = counter(&store);

        store.dispatch(Action::user_profile_show());
        store.dispatch(Action::user_profile_show());

        assert!(store.state().user_profile.visible);
        assert_eq!(notifications.get(), 2);
        assert_eq!(store.dispatch_count(), 2);
    }

    #[test]
    fn test_subscriber_ignores_unrelated_changes() {
        let store = Store::default();
        let sidebar = MockSidebar::attach(&store);
        // Seeding renders once
        assert_eq!(sidebar.ui_updates.get(), 1);

        store.dispatch(Action::user_profile_show());
        assert_eq!(sidebar.ui_updates.get(), 1);

        store.dispatch(Action::sidebar_change_active_page("filesSidebar"));
        assert_eq!(sidebar.ui_updates.get(), 2);

        // Same page again is not a change
        store.dispatch(Action::sidebar_change_active_page("filesSidebar"));
        assert_eq!(sidebar.ui_updates.get(), 2);
    }

    #[test]
    fn test_malformed_payload_is_a_no_op() {
        let store = Store::default();
        let notifications = counter(&store);
        store.dispatch(Action::sidebar_change_active_page("bugSidebar"));

        store.dispatch(Action::new(ActionType::SidebarChangeActivePage, true));

        assert_eq!(store.state().sidebar.active_page, "bugSidebar");
        assert_eq!(notifications.get(), 2);
    }

    #[test]
    fn test_idempotent_read() {
        let store = Store::default();
        store.dispatch(Action::user_profile_show());
        assert_eq!(store.state(), store.state());
    }

    #[test]
    fn test_all_subscribers_notified_in_registration_order() {
        let store = Store::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(n));
        }

        store.dispatch(Action::user_profile_hide());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_handler_reads_new_state() {
        let store = Store::default();
        let seen = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&seen);
        store.subscribe(move |store| *slot.borrow_mut() = Some(store.state()));

        store.dispatch(Action::sidebar_change_active_page("bugSidebar"));

        let seen = seen.borrow();
        assert_eq!(
            seen.as_ref().map(|s| s.sidebar.active_page.as_str()),
            Some("bugSidebar")
        );
    }

    #[test]
    fn test_unsubscribe() {
        let store = Store::default();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.dispatch(Action::user_profile_show());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::user_profile_hide());

        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_notification_applies_next_dispatch() {
        let store = Store::default();
        let late_calls = Rc::new(Cell::new(0));
        let victim = Rc::new(Cell::new(None));

        let target = Rc::clone(&victim);
        store.subscribe(move |store| {
            if let Some(id) = target.take() {
                store.unsubscribe(id);
            }
        });
        let calls = Rc::clone(&late_calls);
        victim.set(Some(store.subscribe(move |_| calls.set(calls.get() + 1))));

        // Removed mid-delivery, but still part of this dispatch's snapshot
        store.dispatch(Action::user_profile_show());
        assert_eq!(late_calls.get(), 1);

        store.dispatch(Action::user_profile_hide());
        assert_eq!(late_calls.get(), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscribe_during_notification_applies_next_dispatch() {
        let store = Store::default();
        let late_calls = Rc::new(Cell::new(0));
        let registered = Cell::new(false);

        let calls = Rc::clone(&late_calls);
        store.subscribe(move |store| {
            if !registered.replace(true) {
                let calls = Rc::clone(&calls);
                store.subscribe(move |_| calls.set(calls.get() + 1));
            }
        });

        // Not part of the snapshot taken for this dispatch
        store.dispatch(Action::user_profile_show());
        assert_eq!(late_calls.get(), 0);
        assert_eq!(store.subscriber_count(), 2);

        store.dispatch(Action::user_profile_hide());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_nested_dispatch_from_handler() {
        let store = Store::default();
        store.subscribe(|store| {
            let (visible, on_files) = store.select(|s| {
                (s.user_profile.visible, s.sidebar.is_active("filesSidebar"))
            });
            if visible && !on_files {
                store.dispatch(Action::sidebar_change_active_page("filesSidebar"));
            }
        });

        store.dispatch(Action::user_profile_show());

        let state = store.state();
        assert!(state.user_profile.visible);
        assert_eq!(state.sidebar.active_page, "filesSidebar");
        assert_eq!(store.dispatch_count(), 2);
    }
}
