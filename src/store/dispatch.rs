use super::store::{Store, Subscription};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Reducer transforms state based on dispatched actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Clone + Send + Sync + 'static;

    /// The action type this reducer handles.
    type Action: Debug;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;

    /// Whether `action` is one this reducer acts on.
    ///
    /// Actions that are not handled are dropped before reaching the store:
    /// the state stays as it is and no observer runs.
    fn handles(_action: &Self::Action) -> bool {
        true
    }
}

/// A store whose state changes only through dispatched actions.
pub struct DispatchStore<R: Reducer> {
    store: Store<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> DispatchStore<R> {
    /// Create a dispatch store with the given initial state.
    pub fn new(initial: R::State) -> Self {
        Self {
            store: Store::new(initial),
            _reducer: PhantomData,
        }
    }

    /// Run `action` through the reducer and return the resulting state.
    pub fn dispatch(&self, action: R::Action) -> R::State {
        if !R::handles(&action) {
            tracing::debug!(?action, "ignoring unrecognized action");
            return self.store.get();
        }

        tracing::debug!(?action, "dispatch");
        self.store.apply(|state| {
            *state = R::reduce(state.clone(), action);
        })
    }

    /// Read a projection of the current state.
    pub fn select<F, T>(&self, selector: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        self.store.read(selector)
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> R::State {
        self.store.get()
    }

    /// Subscribe to state changes caused by handled actions.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Number of currently registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}

impl<R: Reducer> Clone for DispatchStore<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for DispatchStore<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
