use parking_lot::{ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Observers<T> {
    next_id: AtomicU64,
    entries: RwLock<Vec<(u64, Observer<T>)>>,
}

impl<T> Observers<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: RwLock::new(Vec::new()),
        }
    }

    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }
}

/// An observable state container.
///
/// Cloning a store yields another handle onto the same state and the same
/// set of observers.
///
/// Mutations and their notifications are serialized: observers see states
/// in the order the mutations happened, even when handles are shared
/// between threads. An observer may mutate the store it observes; the
/// nested notification runs before the outer one returns.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    observers: Arc<Observers<T>>,
    // Held from the state write through the end of notify
    notify_lock: Arc<ReentrantMutex<()>>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            observers: Arc::new(Observers::new()),
            notify_lock: Arc::new(ReentrantMutex::new(())),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.state.read().clone()
    }

    /// Read state through a function without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read();
        f(&*state)
    }

    /// Update the state in place and notify observers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.apply(f);
    }

    /// Update the state in place, notify observers and return the new state.
    pub(crate) fn apply<F>(&self, f: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let _ordered = self.notify_lock.lock();
        let snapshot = {
            let mut state = self.state.write();
            f(&mut *state);
            state.clone()
        };
        self.notify(&snapshot);
        snapshot
    }

    /// Replace the state and notify observers.
    pub fn set(&self, new_state: T) {
        let _ordered = self.notify_lock.lock();
        let snapshot = {
            let mut state = self.state.write();
            *state = new_state;
            state.clone()
        };
        self.notify(&snapshot);
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every `set` or `update` with the new state,
    /// until [`Subscription::unsubscribe`] is called on the returned handle.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
        T: 'static,
    {
        let id = self.observers.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers.entries.write().push((id, Arc::new(callback)));
        tracing::trace!(observer = id, "observer subscribed");

        let observers: Arc<dyn Unsubscribe> = self.observers.clone();
        Subscription {
            id,
            observers: Arc::downgrade(&observers),
        }
    }

    /// Number of currently registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.entries.read().len()
    }

    /// Notify all observers of a state change.
    ///
    /// Observers are collected first so none of them runs under the state or
    /// observer-list locks.
    fn notify(&self, state: &T) {
        let observers: Vec<Observer<T>> = self
            .observers
            .entries
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(state);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observers: Arc::clone(&self.observers),
            notify_lock: Arc::clone(&self.notify_lock),
        }
    }
}

impl<T: Default + Clone> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

trait Unsubscribe: Send + Sync {
    fn unsubscribe(&self, id: u64) -> bool;
}

impl<T> Unsubscribe for Observers<T> {
    fn unsubscribe(&self, id: u64) -> bool {
        self.remove(id)
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the observer registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
#[must_use = "dropping a Subscription leaves the observer registered for good"]
pub struct Subscription {
    id: u64,
    observers: Weak<dyn Unsubscribe>,
}

impl Subscription {
    /// Remove the observer this handle was created for.
    ///
    /// Does nothing if the store has already been dropped.
    pub fn unsubscribe(self) {
        if let Some(observers) = self.observers.upgrade() {
            if observers.unsubscribe(self.id) {
                tracing::trace!(observer = self.id, "observer unsubscribed");
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
