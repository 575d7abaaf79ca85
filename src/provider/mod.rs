//! Scoped access to a shared counter.
//!
//! This module provides the provider stack that hands a [`Counter`] to
//! code running inside a scope.
//!
//! [`Counter`]: crate::counter::Counter

mod scope;

pub use scope::{use_count, CountProvider};
