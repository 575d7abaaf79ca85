//! # Tally
//!
//! A shared counter that many consumers can read and mutate.
//!
//! Tally offers two ways of sharing the counter, both implementing the
//! [`CounterStore`] contract:
//!
//! ## Scoped provider
//!
//! - [`CountProvider`] - makes a [`Counter`] available inside a scope
//! - [`use_count`] - fetches it, failing with
//!   [`CounterError::NotInitialized`] outside any scope
//!
//! ## Dispatch store
//!
//! - [`AppStore`] - counter state changed only through [`CounterAction`]s
//! - [`store::Reducer`] and [`store::DispatchStore`] - the generic pieces
//!   it is built from
//!
//! The value never drops below zero. Display text derived from it lives in
//! [`message`].

pub mod counter;
pub mod error;
pub mod message;
pub mod provider;
pub mod store;

// Re-export main types for convenience
pub use counter::{AppStore, Counter, CounterAction, CounterState, CounterStore};
pub use error::CounterError;
pub use provider::{use_count, CountProvider};
pub use store::{Store, Subscription};
