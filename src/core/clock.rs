//! Wall-clock source.
//!
//! Aggregation, streak logic and the countdown never read the system clock
//! directly; the caller hands in a [`Clock`] so tests can pin "today" and
//! control how much time passes between ticks.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies the current calendar date and timestamp.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current calendar date in the user's local timezone.
    fn today(&self) -> NaiveDate;

    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at midnight UTC of one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Pin the clock to `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now(&self) -> DateTime<Utc> {
        self.date.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}
