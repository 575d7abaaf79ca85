use crate::store::Reducer;
use std::convert::Infallible;
use std::str::FromStr;

/// The shared counter value.
///
/// `value` never drops below zero: decrementing at zero leaves it at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CounterState {
    /// The current count.
    pub value: u64,
}

impl CounterState {
    /// A state holding `value`.
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// The state after one increment.
    pub fn incremented(self) -> Self {
        Self {
            value: self.value.saturating_add(1),
        }
    }

    /// The state after one decrement, clamped at zero.
    pub fn decremented(self) -> Self {
        Self {
            value: self.value.saturating_sub(1),
        }
    }
}

/// Actions understood by [`CounterReducer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one.
    Increment,
    /// Subtract one, stopping at zero.
    Decrement,
    /// Any action type the counter does not recognize.
    Unknown(String),
}

impl CounterAction {
    /// The action type string, as used by [`FromStr`].
    pub fn action_type(&self) -> &str {
        match self {
            CounterAction::Increment => "counter/increment",
            CounterAction::Decrement => "counter/decrement",
            CounterAction::Unknown(kind) => kind,
        }
    }
}

impl FromStr for CounterAction {
    type Err = Infallible;

    /// Accepts both bare names and slice-qualified types
    /// (`"increment"`, `"counter/increment"`). Never fails: unrecognized
    /// strings become [`CounterAction::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "increment" | "counter/increment" => CounterAction::Increment,
            "decrement" | "counter/decrement" => CounterAction::Decrement,
            other => CounterAction::Unknown(other.to_string()),
        })
    }
}

impl From<&str> for CounterAction {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

/// Pure transition function for [`CounterState`].
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => state.incremented(),
            CounterAction::Decrement => state.decremented(),
            CounterAction::Unknown(_) => state,
        }
    }

    fn handles(action: &Self::Action) -> bool {
        !matches!(action, CounterAction::Unknown(_))
    }
}
