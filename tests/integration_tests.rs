//! Integration tests for Tally

use parking_lot::Mutex;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;
use tally::message::{is_on_fire, message_for};
use tally::{
    use_count, AppStore, CountProvider, Counter, CounterAction, CounterError, CounterStore,
    Subscription,
};

/// Properties every `CounterStore` must satisfy, run against a fresh store.
fn check_contract<S: CounterStore>(fresh: impl Fn() -> S) {
    // Starts at zero
    assert_eq!(fresh().value(), 0);

    // Three increments from zero
    let store = fresh();
    for _ in 0..3 {
        store.increment();
    }
    assert_eq!(store.value(), 3);

    // One decrement from zero holds the floor
    let store = fresh();
    store.decrement();
    assert_eq!(store.value(), 0);

    // Decrements past zero never go negative
    let store = fresh();
    store.increment();
    for _ in 0..10 {
        store.decrement();
    }
    assert_eq!(store.value(), 0);

    // Increment then decrement leaves the value unchanged
    let store = fresh();
    for expected in 0..5 {
        store.increment();
        store.decrement();
        assert_eq!(store.value(), expected);
        store.increment();
    }

    // Observer runs once per mutation, and not after unsubscribing
    let store = fresh();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let subscription = store.subscribe(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
    });
    store.increment();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    subscription.unsubscribe();
    store.increment();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn counter_satisfies_contract() {
    check_contract(Counter::new);
}

#[test]
fn app_store_satisfies_contract() {
    check_contract(AppStore::new);
}

#[test]
fn on_fire_at_ten_increments() {
    let count = Counter::new();
    let mut flags = Vec::new();
    for _ in 0..11 {
        count.increment();
        flags.push((count.value(), is_on_fire(count.value())));
    }

    assert_eq!(flags[8], (9, false));
    assert_eq!(flags[9], (10, true));
    assert_eq!(flags[10], (11, false));
    assert_eq!(message_for(10), "🔥 You're on fire!");
}

#[test]
fn provider_scope_integration() {
    fn header() -> Result<String, CounterError> {
        let count = use_count()?;
        Ok(tally::message::header_line(count.value()))
    }

    fn click_increment() -> Result<(), CounterError> {
        use_count()?.increment();
        Ok(())
    }

    assert_eq!(header(), Err(CounterError::NotInitialized));
    assert_eq!(
        header().unwrap_err().to_string(),
        "use_count must be called within a CountProvider scope"
    );

    let rendered = CountProvider::scope(|| -> Result<String, CounterError> {
        click_increment()?;
        click_increment()?;
        header()
    });
    assert_eq!(rendered.as_deref(), Ok("Current count : 2"));
}

#[test]
fn provider_observer_sees_clicks() {
    let counter = Counter::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_clone = seen.clone();
    let subscription = counter.subscribe(move |value| {
        seen_clone.store(value as usize, Ordering::SeqCst);
    });

    CountProvider::with_counter(counter.clone(), || {
        let count = use_count().unwrap();
        count.increment();
        count.increment();
    });

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    subscription.unsubscribe();
    assert_eq!(counter.subscriber_count(), 0);
}

#[test]
fn dispatch_by_action_type() {
    let store = AppStore::new();

    for kind in ["increment", "counter/increment", "counter/increment"] {
        store.dispatch(kind.into());
    }
    assert_eq!(store.value(), 3);

    let unchanged = store.dispatch(CounterAction::Unknown("counter/reset".into()));
    assert_eq!(unchanged.value, 3);

    store.dispatch("decrement".into());
    assert_eq!(store.select(|state| state.value), 2);
}

#[test]
fn observers_may_reenter_the_store() {
    let store = AppStore::new();
    let mirror = Counter::new();

    let _subscription = store.subscribe({
        let mirror = mirror.clone();
        let reader = store.clone();
        move |value| {
            assert_eq!(reader.value(), value);
            mirror.increment();
        }
    });

    store.increment();
    store.decrement();
    store.decrement();
    assert_eq!(store.value(), 0);
    assert_eq!(mirror.value(), 3);
}

/// An observer that keeps clicking until 3, then removes itself.
fn check_self_driving_observer<S: CounterStore + Clone + Send + Sync + 'static>(store: S) {
    let calls = Arc::new(AtomicUsize::new(0));
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let subscription = store.subscribe({
        let me = store.clone();
        let calls = calls.clone();
        let slot = slot.clone();
        move |value| {
            calls.fetch_add(1, Ordering::SeqCst);
            if value < 3 {
                me.increment();
            } else if let Some(own) = slot.lock().take() {
                own.unsubscribe();
            }
        }
    });
    *slot.lock() = Some(subscription);

    store.increment();
    assert_eq!(store.value(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    store.increment();
    assert_eq!(store.value(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn observer_mutates_and_unsubscribes_during_notify() {
    check_self_driving_observer(Counter::new());
    check_self_driving_observer(AppStore::new());
}

#[test]
fn last_observed_value_matches_across_threads() {
    let count = Counter::new();
    let last = Arc::new(AtomicUsize::new(usize::MAX));

    let _subscription = count.subscribe({
        let last = last.clone();
        move |value| {
            if value == 1 {
                thread::sleep(Duration::from_millis(100));
            }
            last.store(value as usize, Ordering::SeqCst);
        }
    });

    let clicker = thread::spawn({
        let count = count.clone();
        move || count.increment()
    });
    thread::sleep(Duration::from_millis(20));
    count.increment();
    clicker.join().unwrap();

    assert_eq!(count.value(), 2);
    assert_eq!(last.load(Ordering::SeqCst), 2);
}
