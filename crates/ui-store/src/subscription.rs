//! Subscriber list for store change notifications

use std::fmt;
use std::rc::Rc;

use crate::store::Store;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Change handler. Receives the store it is registered with and pulls
/// whatever state it needs from it.
pub(crate) type Handler = Rc<dyn Fn(&Store)>;

/// Registered handlers in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Handler)>,
}

impl Subscribers {
    pub(crate) fn insert(&mut self, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, handler));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Handlers to notify for one dispatch. Changes to the list after this
    /// point only take effect for the next dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Handler> {
        self.entries
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
