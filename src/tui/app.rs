//! Application state for the focus TUI.

use chrono::Duration;
use serde::Serialize;

use crate::config::Config;
use crate::core::Clock;
use crate::error::FocusError;
use crate::features::focus::{FocusController, FocusReport, IntervalOutcome, TimerState};
use crate::storage::KeyValueStore;

/// Shortest and longest interval the +/- keys will set.
const MIN_MINUTES: i64 = 1;
const MAX_MINUTES: i64 = 180;

/// Status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Neutral hint.
    Info(String),
    /// An interval was completed.
    Success(String),
    /// An interval was abandoned.
    Failure(String),
}

impl Status {
    /// Message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Info(s) | Self::Success(s) | Self::Failure(s) => s,
        }
    }
}

/// Counts for one TUI session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Intervals that ran to zero.
    pub completed: u32,
    /// Intervals given up early.
    pub abandoned: u32,
}

/// Application state.
pub struct App<'a, S, C> {
    controller: &'a mut FocusController<S, C>,
    abandon_on_focus_lost: bool,
    /// Status message to display.
    pub status: Option<Status>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// What happened during this session.
    pub summary: RunSummary,
}

impl<'a, S: KeyValueStore, C: Clock> App<'a, S, C> {
    /// Create a new app instance around `controller`.
    pub fn new(controller: &'a mut FocusController<S, C>, config: &Config) -> Self {
        Self {
            controller,
            abandon_on_focus_lost: config.focus.abandon_on_focus_lost,
            status: Some(Status::Info("Press space to start".to_string())),
            should_quit: false,
            summary: RunSummary::default(),
        }
    }

    /// The controller's clock.
    pub fn clock(&self) -> &C {
        self.controller.clock()
    }

    /// Timer state.
    pub fn timer_state(&self) -> TimerState {
        self.controller.timer().state()
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining(&self) -> String {
        self.controller.timer().format_remaining()
    }

    /// Progress through the interval (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        self.controller.timer().progress()
    }

    /// Configured interval length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.controller.timer().duration_minutes()
    }

    /// Totals, streak and title for today.
    pub fn report(&self) -> FocusReport {
        self.controller.report()
    }

    /// Start, pause, or resume.
    pub fn toggle(&mut self) {
        if self.timer_state() == TimerState::Running {
            self.controller.pause();
            self.status = Some(Status::Info("Paused".to_string()));
        } else if self.controller.start() {
            self.status = Some(Status::Info("Focusing. Stay in this window.".to_string()));
        }
    }

    /// Return to idle. A run in progress is abandoned.
    pub fn reset(&mut self) {
        let outcome = self.controller.reset();
        match outcome {
            Some(outcome) => self.apply(&outcome),
            None => self.status = None,
        }
    }

    /// Lengthen or shorten the interval by `delta` minutes while idle.
    pub fn adjust(&mut self, delta: i64) {
        if self.timer_state().is_active() {
            self.status = Some(Status::Info("Reset to change the length".to_string()));
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let current = self.duration_minutes().round() as i64;
        let minutes = (current + delta).clamp(MIN_MINUTES, MAX_MINUTES);
        if self.controller.set_duration(Duration::minutes(minutes)) {
            self.status = Some(Status::Info(format!("Interval set to {minutes}m")));
        }
    }

    /// The terminal lost focus.
    pub fn focus_lost(&mut self) {
        if !self.abandon_on_focus_lost || self.timer_state() != TimerState::Running {
            return;
        }
        tracing::debug!("terminal lost focus while running");
        if let Some(outcome) = self.controller.abandon() {
            self.apply(&outcome);
        }
    }

    /// Leave the app. A run in progress is abandoned.
    pub fn quit(&mut self) {
        if let Some(outcome) = self.controller.abandon() {
            self.apply(&outcome);
        }
        self.should_quit = true;
    }

    /// Advance the timer by `elapsed` wall time.
    ///
    /// # Errors
    ///
    /// Returns an error if a completed interval cannot be persisted.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), FocusError> {
        if let Some(outcome) = self.controller.tick(elapsed)? {
            self.apply(&outcome);
        }
        Ok(())
    }

    fn apply(&mut self, outcome: &IntervalOutcome) {
        match outcome {
            IntervalOutcome::Completed {
                minutes,
                streak,
                title,
                ..
            } => {
                self.summary.completed += 1;
                let unit = if *streak == 1 { "day" } else { "days" };
                self.status = Some(Status::Success(format!(
                    "Interval complete! +{minutes:.0}m. Streak {streak} {unit}: {}",
                    title.label()
                )));
            }
            IntervalOutcome::Abandoned { .. } => {
                self.summary.abandoned += 1;
                self.status = Some(Status::Failure(
                    "Interval abandoned. Nothing was recorded.".to_string(),
                ));
            }
        }
    }
}
