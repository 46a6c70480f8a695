//! Countdown timer for a single focus interval.
//!
//! The timer never reads the clock. Whoever drives it calls [`Timer::tick`]
//! with the wall time that passed since the previous tick.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Armed with a full duration, not counting down
    Idle,
    /// Counting down
    Running,
    /// Stopped mid-run; remaining time is kept
    Paused,
    /// Reached zero
    Completed,
    /// Given up before reaching zero
    Abandoned,
}

impl TimerState {
    /// Whether an interval is in progress (running or paused).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
            Self::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// A countdown timer.
#[derive(Debug, Clone)]
pub struct Timer {
    total_ms: i64,
    remaining_ms: i64,
    state: TimerState,
}

impl Timer {
    /// Create an idle timer with the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let ms = duration.num_milliseconds().max(0);
        Self {
            total_ms: ms,
            remaining_ms: ms,
            state: TimerState::Idle,
        }
    }

    /// Create a timer from minutes.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::minutes(i64::from(minutes)))
    }

    /// Start a fresh run, or resume a paused one.
    ///
    /// Resuming continues from the remaining time rather than restarting the
    /// full length. Returns false if there was nothing to start.
    pub fn start(&mut self) -> bool {
        match self.state {
            TimerState::Running => false,
            TimerState::Paused => {
                self.state = TimerState::Running;
                true
            }
            TimerState::Idle | TimerState::Completed | TimerState::Abandoned => {
                if self.total_ms == 0 {
                    return false;
                }
                self.remaining_ms = self.total_ms;
                self.state = TimerState::Running;
                true
            }
        }
    }

    /// Pause a running timer.
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            true
        } else {
            false
        }
    }

    /// Abandon the interval in progress.
    ///
    /// Returns true only if a running or paused interval was abandoned.
    pub fn abandon(&mut self) -> bool {
        if self.state.is_active() {
            self.state = TimerState::Abandoned;
            true
        } else {
            false
        }
    }

    /// Return to idle with the full duration.
    pub fn reset(&mut self) {
        self.remaining_ms = self.total_ms;
        self.state = TimerState::Idle;
    }

    /// Change the configured length. Ignored while an interval is in progress
    /// or when `duration` is not positive.
    pub fn set_duration(&mut self, duration: Duration) -> bool {
        if self.state.is_active() || duration <= Duration::zero() {
            return false;
        }
        self.total_ms = duration.num_milliseconds();
        self.remaining_ms = self.total_ms;
        self.state = TimerState::Idle;
        true
    }

    /// Advance by `elapsed` wall time.
    ///
    /// Returns true exactly once, on the tick that reaches zero.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.remaining_ms = (self.remaining_ms - elapsed.num_milliseconds().max(0)).max(0);

        if self.remaining_ms == 0 {
            self.state = TimerState::Completed;
            true
        } else {
            false
        }
    }

    /// Configured length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::milliseconds(self.total_ms)
    }

    /// Configured length in (possibly fractional) minutes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_minutes(&self) -> f64 {
        self.total_ms as f64 / 60_000.0
    }

    /// Get remaining time as Duration.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::milliseconds(self.remaining_ms)
    }

    /// Get elapsed time as Duration.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::milliseconds(self.total_ms - self.remaining_ms)
    }

    /// Progress through the interval (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f64 / self.total_ms as f64)
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }
}

/// Format a duration as MM:SS, rounding to the nearest second.
///
/// Minutes are not wrapped into hours, so 90 minutes is `90:00`.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = (d.num_milliseconds().max(0) + 500) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
