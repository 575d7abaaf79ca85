use super::counter::CounterStore;
use super::state::{CounterAction, CounterReducer, CounterState};
use crate::store::{DispatchStore, Subscription};
use std::sync::OnceLock;

/// The counter as a dispatch store.
///
/// State changes only through [`dispatch`](AppStore::dispatch); the
/// [`CounterStore`] methods are shorthands for dispatching
/// [`CounterAction::Increment`] and [`CounterAction::Decrement`].
///
/// Construct one with [`AppStore::new`] and pass it to the code that needs
/// it, or reach for the process-wide instance with [`AppStore::global`].
///
/// # Examples
///
/// ```
/// use tally::{AppStore, CounterAction};
///
/// let store = AppStore::new();
/// store.dispatch(CounterAction::Increment);
/// store.dispatch("counter/increment".into());
/// store.dispatch("counter/reset".into()); // unrecognized, ignored
/// assert_eq!(store.select(|state| state.value), 2);
/// ```
#[derive(Clone, Default)]
pub struct AppStore {
    inner: DispatchStore<CounterReducer>,
}

impl AppStore {
    /// A fresh store with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store, created on first use.
    ///
    /// Every call returns a handle onto the same state. The instance lives
    /// for the rest of the process.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<AppStore> = OnceLock::new();
        GLOBAL
            .get_or_init(|| {
                tracing::trace!("initializing global counter store");
                AppStore::new()
            })
            .clone()
    }

    /// Run `action` through the counter reducer and return the new state.
    ///
    /// Unrecognized actions return the unchanged state without notifying
    /// observers.
    pub fn dispatch(&self, action: CounterAction) -> CounterState {
        self.inner.dispatch(action)
    }

    /// Read a projection of the current state.
    pub fn select<F, T>(&self, selector: F) -> T
    where
        F: FnOnce(&CounterState) -> T,
    {
        self.inner.select(selector)
    }

    /// Snapshot of the full state.
    pub fn state(&self) -> CounterState {
        self.inner.state()
    }
}

impl CounterStore for AppStore {
    fn value(&self) -> u64 {
        self.select(|state| state.value)
    }

    fn increment(&self) {
        self.dispatch(CounterAction::Increment);
    }

    fn decrement(&self) {
        self.dispatch(CounterAction::Decrement);
    }

    fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.inner.subscribe(move |state| observer(state.value))
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state())
            .field("subscribers", &self.inner.subscriber_count())
            .finish()
    }
}
