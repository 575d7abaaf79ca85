use crate::counter::Counter;
use crate::error::CounterError;
use std::cell::RefCell;

// Thread-local stack of counters made available by enclosing providers
thread_local! {
    static PROVIDER_STACK: RefCell<Vec<Counter>> = const { RefCell::new(Vec::new()) };
}

/// Makes a [`Counter`] available to everything that runs inside a scope.
///
/// Code running inside [`CountProvider::scope`] or
/// [`CountProvider::with_counter`] reaches the counter through
/// [`use_count`]. Outside any scope, `use_count` fails with
/// [`CounterError::NotInitialized`].
///
/// Scopes nest: the innermost provider wins. The stack is thread-local, so
/// a scope opened on one thread is not visible from another.
///
/// # Examples
///
/// ```
/// use tally::provider::{use_count, CountProvider};
/// use tally::{CounterError, CounterStore};
///
/// fn click() -> Result<u64, CounterError> {
///     let count = use_count()?;
///     count.increment();
///     Ok(count.value())
/// }
///
/// CountProvider::scope(|| {
///     assert_eq!(click(), Ok(1));
///     assert_eq!(click(), Ok(2));
/// });
///
/// assert_eq!(click(), Err(CounterError::NotInitialized));
/// ```
pub struct CountProvider;

impl CountProvider {
    /// Run `f` with a fresh counter, starting at zero, in scope.
    ///
    /// The counter leaves scope when `f` returns, including by unwinding.
    pub fn scope<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        Self::with_counter(Counter::new(), f)
    }

    /// Run `f` with `counter` as the innermost provided counter.
    ///
    /// Useful when the caller wants to keep a handle on the counter after
    /// the scope ends, or to share one counter between several scopes.
    pub fn with_counter<F, R>(counter: Counter, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let depth = PROVIDER_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push(counter);
            stack.len()
        });
        tracing::trace!(depth, "entered count provider");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

        PROVIDER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
        tracing::trace!(depth, "left count provider");

        match result {
            Ok(r) => r,
            Err(e) => std::panic::resume_unwind(e),
        }
    }

    /// Whether the current thread is inside a provider scope.
    pub fn is_active() -> bool {
        PROVIDER_STACK.with(|stack| !stack.borrow().is_empty())
    }
}

/// The counter from the innermost enclosing [`CountProvider`].
pub fn use_count() -> Result<Counter, CounterError> {
    PROVIDER_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .cloned()
            .ok_or(CounterError::NotInitialized)
    })
}
