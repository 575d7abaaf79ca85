//! Observable state containers.
//!
//! [`Store`] holds a value and notifies subscribed observers after every
//! change. [`DispatchStore`] layers action dispatch through a pure
//! [`Reducer`] on top of it.

mod dispatch;
mod store;

pub use dispatch::{DispatchStore, Reducer};
pub use store::{Store, Subscription};
