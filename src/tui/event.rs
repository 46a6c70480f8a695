//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Clock;
use crate::error::FocusError;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Wait up to `timeout` for one terminal event and apply it to `app`.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: KeyValueStore, C: Clock>(
    app: &mut App<'_, S, C>,
    timeout: Duration,
) -> Result<(), FocusError> {
    if !event::poll(timeout).map_err(|e| FocusError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(());
    }

    match event::read().map_err(|e| FocusError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::FocusLost => app.focus_lost(),
        _ => {}
    }

    Ok(())
}

fn handle_key<S: KeyValueStore, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('+' | '=') | KeyCode::Up => app.adjust(5),
        KeyCode::Char('-') | KeyCode::Down => app.adjust(-5),
        _ => {}
    }
}
