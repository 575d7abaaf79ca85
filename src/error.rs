//! Error types for counter access.

use thiserror::Error;

/// Errors raised when reaching for a counter.
///
/// Mutations never fail: decrementing at zero is clamped, not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The counter was requested outside any [`CountProvider`] scope.
    ///
    /// [`CountProvider`]: crate::provider::CountProvider
    #[error("use_count must be called within a CountProvider scope")]
    NotInitialized,
}
