use crate::{Identity, Subscription, SubscriptionId};

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

/// Callback invoked with the current identity (`None` = signed out)
pub type Observer = Arc<dyn Fn(Option<&Identity>) + Send + Sync>;

/// Holder of the current signed-in identity.
///
/// Starts signed out. Cloning yields another handle onto the same state, so
/// a host creates one store at startup and hands clones to whoever needs it.
///
/// Observers are called after the internal lock has been released, which
/// lets them call back into the store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

/// Current value, observer map and pending deliveries, guarded together as one unit
#[derive(Default)]
pub(crate) struct StoreInner {
    current: Option<Arc<Identity>>,
    observers: BTreeMap<SubscriptionId, Observer>,
    next_id: u64,
    /// Deliveries queued by `set`, drained in order by whichever caller is notifying
    pending: VecDeque<Delivery>,
    notifying: bool,
}

struct Delivery {
    id: SubscriptionId,
    observer: Observer,
    value: Option<Arc<Identity>>,
}

impl StoreInner {
    fn lock(inner: &Mutex<StoreInner>) -> MutexGuard<'_, StoreInner> {
        // Observers never run under this lock, so a poisoned guard still holds consistent state
        inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn remove(inner: &Mutex<StoreInner>, id: SubscriptionId) -> bool {
        let mut guard = Self::lock(inner);
        let removed = guard.observers.remove(&id).is_some();
        if removed {
            trace!(
                "Unsubscribed {id} ({} observers remaining)",
                guard.observers.len()
            );
        }
        removed
    }

    /// Next delivery whose observer is still registered.
    ///
    /// Returns None and ends the drain, under the same lock, once the queue is empty.
    fn next_delivery(inner: &Mutex<StoreInner>) -> Option<Delivery> {
        let mut guard = Self::lock(inner);
        while let Some(delivery) = guard.pending.pop_front() {
            if guard.observers.contains_key(&delivery.id) {
                return Some(delivery);
            }
            trace!("Skipping {}: unsubscribed before delivery", delivery.id);
        }
        guard.notifying = false;
        None
    }
}

/// Ends a drain that an observer panicked out of, so later `set` calls still notify
struct DrainGuard<'a> {
    inner: &'a Mutex<StoreInner>,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut guard = StoreInner::lock(self.inner);
            guard.pending.clear();
            guard.notifying = false;
        }
    }
}

impl SessionStore {
    /// Create a store with no signed-in identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identity, or `None` when signed out
    pub fn get(&self) -> Option<Arc<Identity>> {
        StoreInner::lock(&self.inner).current.clone()
    }

    /// Replace the current identity and notify every registered observer once.
    ///
    /// The value is replaced unconditionally, even when it equals the
    /// previous one. Observers removed before their turn are skipped.
    ///
    /// A `set` made while another `set` is still notifying (from inside an
    /// observer, or from another thread) only queues its deliveries; the
    /// caller already notifying delivers them after the current ones, so
    /// every observer ends on the latest value.
    pub fn set(&self, value: Option<Identity>) {
        let value = value.map(Arc::new);

        let drain = {
            let mut inner = StoreInner::lock(&self.inner);
            inner.current = value.clone();

            let deliveries: Vec<Delivery> = inner
                .observers
                .iter()
                .map(|(id, observer)| Delivery {
                    id: *id,
                    observer: Arc::clone(observer),
                    value: value.clone(),
                })
                .collect();
            debug!(
                "Session set: logged_in={}, nickname={}, queued {} deliveries",
                value.is_some(),
                value.as_deref().map(Identity::nickname).unwrap_or("-"),
                deliveries.len()
            );
            inner.pending.extend(deliveries);

            !std::mem::replace(&mut inner.notifying, true)
        };

        if !drain {
            return;
        }

        let _guard = DrainGuard { inner: &self.inner };
        while let Some(delivery) = StoreInner::next_delivery(&self.inner) {
            (delivery.observer)(delivery.value.as_deref());
        }
    }

    /// Shorthand for `set(Some(identity))`
    pub fn login(&self, identity: Identity) {
        self.set(Some(identity));
    }

    /// Shorthand for `set(None)`
    pub fn logout(&self) {
        self.set(None);
    }

    /// Register `observer` and call it once with the current value before returning
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Option<&Identity>) + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);

        let (id, current) = {
            let mut inner = StoreInner::lock(&self.inner);
            let id = SubscriptionId::new(inner.next_id);
            inner.next_id += 1;
            inner.observers.insert(id, Arc::clone(&observer));
            trace!("Subscribed {id} ({} observers total)", inner.observers.len());
            (id, inner.current.clone())
        };

        observer(current.as_deref());

        Subscription::new(id, Arc::downgrade(&self.inner))
    }

    /// Deregister by id. Returns false if no such observer is registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        StoreInner::remove(&self.inner, id)
    }

    pub fn is_logged_in(&self) -> bool {
        StoreInner::lock(&self.inner).current.is_some()
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        StoreInner::lock(&self.inner).observers.len()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = StoreInner::lock(&self.inner);
        f.debug_struct("SessionStore")
            .field("current", &inner.current)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
