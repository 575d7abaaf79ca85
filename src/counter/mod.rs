//! The shared counter.
//!
//! [`CounterStore`] is the contract consumers depend on. It has two
//! realizations over the same state:
//! - [`Counter`] - a value cell with `increment`/`decrement`, typically
//!   handed out by a [`CountProvider`](crate::provider::CountProvider)
//! - [`AppStore`] - a dispatch store driven by [`CounterAction`]s

mod app_store;
mod counter;
mod state;

pub use app_store::AppStore;
pub use counter::{Counter, CounterStore};
pub use state::{CounterAction, CounterReducer, CounterState};
