//! Last-seen value tracking for views
//!
//! The store notifies every subscriber after every dispatch. A view keeps a
//! [`SliceWatcher`] per slice it renders and only does its expensive update
//! when [`SliceWatcher::observe`] reports a change.

/// Remembers the last value a view rendered
#[derive(Debug, Clone, Default)]
pub struct SliceWatcher<T> {
    last_seen: Option<T>,
}

impl<T: PartialEq> SliceWatcher<T> {
    /// A watcher that has seen nothing yet; the first observation counts as a change
    pub fn new() -> Self {
        Self { last_seen: None }
    }

    /// Record `current` and report whether it differs from the last seen value
    pub fn observe(&mut self, current: T) -> bool {
        if self.last_seen.as_ref() == Some(&current) {
            return false;
        }
        self.last_seen = Some(current);
        true
    }

    pub fn last_seen(&self) -> Option<&T> {
        self.last_seen.as_ref()
    }
}
