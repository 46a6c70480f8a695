//! Core abstractions for focuswave.
//!
//! This module provides the injected clock and shared parsing utilities.

mod clock;
mod datetime;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{format_minutes, parse_date, parse_duration};
