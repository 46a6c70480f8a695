//! Focus timer and session tracking.
//!
//! Provides timed focus intervals with daily bookkeeping:
//! - Countdown timer with pause, reset and abandon
//! - Per-day focus minutes, consecutive-day streaks and titles
//! - Today / week / month totals and a weekly chart

pub mod aggregates;
pub mod controller;
pub mod report;
pub mod storage;
pub mod timer;
pub mod title;
pub mod tracker;

pub use aggregates::{compute_aggregates, Aggregates};
pub use controller::{FocusController, IntervalOutcome, TimerSnapshot};
pub use report::{render_week_chart, FocusReport, NextTitle, BROKEN_MARKER};
pub use storage::TrackerStore;
pub use timer::{format_duration_mmss, Timer, TimerState};
pub use title::{title_for_streak, TitleTier};
pub use tracker::{record_completion, SessionRecord, TrackerState};
