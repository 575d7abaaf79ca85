use super::state::CounterState;
use crate::store::{Store, Subscription};

/// Read and mutate access to a shared, non-negative counter.
///
/// Both [`Counter`] and [`AppStore`](super::AppStore) implement this, so
/// consumers can be written once against either.
pub trait CounterStore {
    /// The current value.
    fn value(&self) -> u64;

    /// Add one and notify observers.
    fn increment(&self);

    /// Subtract one, stopping at zero, and notify observers.
    fn decrement(&self);

    /// Register `observer` to run with the new value after every mutation.
    fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(u64) + Send + Sync + 'static;
}

/// A counter cell: the value plus its two mutations.
///
/// Clones share the same value and observers.
///
/// # Examples
///
/// ```
/// use tally::{Counter, CounterStore};
///
/// let count = Counter::new();
/// count.increment();
/// count.increment();
/// count.decrement();
/// assert_eq!(count.value(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Counter {
    store: Store<CounterState>,
}

impl Counter {
    /// A counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter starting at `value`.
    pub fn with_value(value: u64) -> Self {
        Self {
            store: Store::new(CounterState::new(value)),
        }
    }

    /// Snapshot of the full state.
    pub fn state(&self) -> CounterState {
        self.store.get()
    }

    /// Number of observers currently subscribed.
    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}

impl CounterStore for Counter {
    fn value(&self) -> u64 {
        self.store.read(|state| state.value)
    }

    fn increment(&self) {
        let state = self.store.apply(|state| *state = state.incremented());
        tracing::debug!(value = state.value, "counter incremented");
    }

    fn decrement(&self) {
        let state = self.store.apply(|state| *state = state.decremented());
        tracing::debug!(value = state.value, "counter decremented");
    }

    fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.store.subscribe(move |state| observer(state.value))
    }
}

impl std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
