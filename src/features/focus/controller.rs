//! Owner of the tracker state and the running timer.
//!
//! The controller is the only writer of [`TrackerState`]. A timer that runs to
//! zero records its full configured length for the clock's current date and
//! persists immediately. An abandoned timer records nothing.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::report::FocusReport;
use super::storage::TrackerStore;
use super::timer::{Timer, TimerState};
use super::title::{title_for_streak, TitleTier};
use super::tracker::{record_completion, TrackerState};
use crate::core::Clock;
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// What happened to the interval in progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum IntervalOutcome {
    /// Ran to zero and was recorded.
    Completed {
        /// Minutes credited.
        minutes: f64,
        /// Date credited.
        date: NaiveDate,
        /// Streak after recording.
        streak: u32,
        /// Title for the new streak.
        title: TitleTier,
    },
    /// Given up early; nothing was recorded.
    Abandoned {
        /// Time that had elapsed when the interval was abandoned.
        #[serde(skip)]
        elapsed: Duration,
    },
}

/// Point-in-time view of the timer for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    /// Timer state.
    pub state: TimerState,
    /// Remaining time as `MM:SS`.
    pub remaining: String,
    /// Progress through the interval (0.0 - 1.0).
    pub progress: f64,
    /// Configured length in minutes.
    pub duration_minutes: f64,
}

/// Drives one timer and keeps the tracker state in sync with storage.
pub struct FocusController<S, C> {
    store: TrackerStore<S>,
    clock: C,
    state: TrackerState,
    timer: Timer,
}

impl<S: KeyValueStore, C: Clock> FocusController<S, C> {
    /// Load persisted state and arm an idle timer of `minutes`.
    pub fn new(store: S, clock: C, minutes: u32) -> Self {
        let store = TrackerStore::new(store);
        let state = store.load();
        tracing::debug!(
            records = state.sessions.len(),
            streak = state.streak,
            "tracker state loaded"
        );

        Self {
            store,
            clock,
            state,
            timer: Timer::from_minutes(minutes),
        }
    }

    /// Current tracker state.
    pub const fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Current timer.
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The injected clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Start or resume the timer.
    pub fn start(&mut self) -> bool {
        let started = self.timer.start();
        if started {
            tracing::info!(minutes = self.timer.duration_minutes(), "focus interval started");
        }
        started
    }

    /// Pause the timer.
    pub fn pause(&mut self) -> bool {
        self.timer.pause()
    }

    /// Reset the timer to idle. Abandons a run in progress.
    pub fn reset(&mut self) -> Option<IntervalOutcome> {
        let outcome = self.abandon();
        self.timer.reset();
        outcome
    }

    /// Change the interval length. Ignored while an interval is in progress.
    pub fn set_duration(&mut self, duration: Duration) -> bool {
        self.timer.set_duration(duration)
    }

    /// Give up the interval in progress. Nothing is recorded.
    pub fn abandon(&mut self) -> Option<IntervalOutcome> {
        let elapsed = self.timer.elapsed();
        if !self.timer.abandon() {
            return None;
        }

        tracing::info!(
            elapsed_secs = elapsed.num_seconds(),
            "focus interval abandoned, nothing recorded"
        );
        Some(IntervalOutcome::Abandoned { elapsed })
    }

    /// Advance the timer by `elapsed`. Records and persists the interval on
    /// the tick that completes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the completed interval cannot be persisted. The
    /// in-memory state is updated regardless.
    pub fn tick(&mut self, elapsed: Duration) -> Result<Option<IntervalOutcome>, FocusError> {
        if !self.timer.tick(elapsed) {
            return Ok(None);
        }

        let minutes = self.timer.duration_minutes();
        let date = self.clock.today();
        self.apply_completion(minutes, date)?;

        Ok(Some(IntervalOutcome::Completed {
            minutes,
            date,
            streak: self.state.streak,
            title: title_for_streak(self.state.streak),
        }))
    }

    /// Record a completed interval directly, without running the timer.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is after the clock's current date, or if the
    /// new state cannot be persisted.
    pub fn record(&mut self, minutes: f64, date: NaiveDate) -> Result<(), FocusError> {
        let today = self.clock.today();
        if date > today {
            return Err(FocusError::InvalidInput(format!(
                "Cannot record a future date: {date} is after {today}"
            )));
        }
        self.apply_completion(minutes, date)
    }

    fn apply_completion(&mut self, minutes: f64, date: NaiveDate) -> Result<(), FocusError> {
        let before = std::mem::take(&mut self.state);
        let unchanged = before.clone();
        self.state = record_completion(minutes, date, before);

        if self.state == unchanged {
            return Ok(());
        }

        tracing::info!(
            minutes,
            %date,
            streak = self.state.streak,
            "focus interval recorded"
        );
        self.store.save(&self.state)
    }

    /// Report relative to the clock's current date.
    pub fn report(&self) -> FocusReport {
        FocusReport::generate(&self.state, self.clock.today())
    }

    /// Report relative to `reference_date`.
    pub fn report_for(&self, reference_date: NaiveDate) -> FocusReport {
        FocusReport::generate(&self.state, reference_date)
    }

    /// Snapshot of the timer.
    pub fn timer_snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.timer.state(),
            remaining: self.timer.format_remaining(),
            progress: self.timer.progress(),
            duration_minutes: self.timer.duration_minutes(),
        }
    }
}
