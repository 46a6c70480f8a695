//! Terminal User Interface (TUI) for focuswave.
//!
//! A full-screen countdown for one focus interval at a time, with today's
//! totals, the streak and the weekly chart alongside. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, RunSummary, Status};

use std::io;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::core::Clock;
use crate::error::FocusError;
use crate::features::focus::FocusController;
use crate::storage::KeyValueStore;

/// Run the TUI until the user quits.
///
/// Leaving while an interval is in progress abandons it.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn, or if a
/// completed interval cannot be persisted.
pub fn run<S: KeyValueStore, C: Clock>(
    controller: &mut FocusController<S, C>,
    config: &Config,
) -> Result<RunSummary, FocusError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .map_err(|e| FocusError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(controller, config);
    let result = run_app(&mut terminal, &mut app, config);

    // Anything still in progress when the loop exits early is abandoned
    if !app.should_quit {
        app.quit();
    }
    let summary = app.summary;

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .ok();
    terminal.show_cursor().ok();

    tracing::debug!(
        completed = summary.completed,
        abandoned = summary.abandoned,
        "focus session closed"
    );
    result.map(|()| summary)
}

/// Run the main application loop.
fn run_app<B: Backend, S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, S, C>,
    config: &Config,
) -> Result<(), FocusError> {
    let poll_timeout = Duration::from_millis(config.focus.tick_interval_ms.clamp(10, 1000));
    let chart_min_scale = f64::from(config.stats.chart_min_scale_minutes);
    let mut ticker = Ticker::new(app.clock());

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app, chart_min_scale))
            .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;

        event::handle_events(app, poll_timeout)?;

        let elapsed = ticker.elapsed(app.clock());
        app.tick(elapsed)?;
    }

    Ok(())
}

/// Measures wall time between loop iterations with the injected clock.
struct Ticker {
    last: DateTime<Utc>,
}

impl Ticker {
    fn new<C: Clock>(clock: &C) -> Self {
        Self { last: clock.now() }
    }

    /// Time since the previous call. A clock that steps backwards yields zero.
    fn elapsed<C: Clock>(&mut self, clock: &C) -> chrono::Duration {
        let now = clock.now();
        let elapsed = (now - self.last).max(chrono::Duration::zero());
        self.last = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockClock;
    use chrono::TimeZone;

    #[test]
    fn test_ticker_measures_clock_time() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let offsets_ms = [0, 1_500, 1_700, 1_200, 2_200];

        let mut calls = 0;
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(offsets_ms.len())
            .returning(move || {
                let now = start + chrono::Duration::milliseconds(offsets_ms[calls]);
                calls += 1;
                now
            });

        let mut ticker = Ticker::new(&clock);
        assert_eq!(ticker.elapsed(&clock), chrono::Duration::milliseconds(1_500));
        assert_eq!(ticker.elapsed(&clock), chrono::Duration::milliseconds(200));
        // Clock stepped back
        assert_eq!(ticker.elapsed(&clock), chrono::Duration::zero());
        assert_eq!(ticker.elapsed(&clock), chrono::Duration::seconds(1));
    }
}
