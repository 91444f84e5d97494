use crate::session_store::StoreInner;

use std::fmt;
use std::sync::{Mutex, Weak};

/// Handle identifying one registered observer.
///
/// Ids come from a per-store monotonic counter and are never reused, so a
/// stale id can never remove a newer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Returned by [`SessionStore::subscribe`](crate::SessionStore::subscribe).
///
/// Dropping the handle does NOT deregister the observer; call
/// [`Subscription::unsubscribe`] for that.
#[must_use = "the observer stays registered until `unsubscribe` is called"]
pub struct Subscription {
    id: SubscriptionId,
    store: Weak<Mutex<StoreInner>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, store: Weak<Mutex<StoreInner>>) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Deregister the observer.
    ///
    /// Returns false if it was already removed or the store is gone.
    pub fn unsubscribe(self) -> bool {
        match self.store.upgrade() {
            Some(inner) => StoreInner::remove(&inner, self.id),
            None => false,
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("store_alive", &(self.store.strong_count() > 0))
            .finish()
    }
}
