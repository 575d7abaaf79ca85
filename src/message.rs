//! Display text derived from the counter value.
//!
//! Everything here is a pure function of the value, so any presentation
//! layer renders the same bytes for the same count.

/// Page title.
pub const TITLE: &str = "🤖 Fun Counter App 🎉";

/// Footer shown under the controls.
pub const FOOTER: &str = "Keep clicking, who knows what happens at 100? 😏";

/// Label on the increment control.
pub const INCREMENT_LABEL: &str = "Increment 🚀";

/// Label on the decrement control.
pub const DECREMENT_LABEL: &str = "Decrement 👎";

const NO_CLICKS: &str = "🙈 No clicks yet!";
const ON_FIRE: &str = "🔥 You're on fire!";

/// True for positive multiples of ten.
pub fn is_on_fire(value: u64) -> bool {
    value != 0 && value % 10 == 0
}

/// The whimsical message for `value`, empty when there is nothing to say.
pub fn message_for(value: u64) -> &'static str {
    if value == 0 {
        NO_CLICKS
    } else if is_on_fire(value) {
        ON_FIRE
    } else {
        ""
    }
}

/// The status line under the title: `Current count: {value} {message}`.
///
/// The separating space is always present, even when the message is empty.
pub fn status_line(value: u64) -> String {
    format!("Current count: {} {}", value, message_for(value))
}

/// The count shown in the page header.
pub fn header_line(value: u64) -> String {
    format!("Current count : {}", value)
}
