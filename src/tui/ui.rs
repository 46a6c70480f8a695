//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::{format_minutes, Clock};
use crate::features::focus::{render_week_chart, FocusReport, TimerState, BROKEN_MARKER};
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Status};

const KEY_HELP: &str = "space:start/pause | r:reset | +/-:length | q:quit";

/// Render the application UI.
pub fn render<S: KeyValueStore, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<'_, S, C>,
    chart_min_scale: f64,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(9),    // Stats and chart
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let report = app.report();

    render_countdown(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_stats(frame, &report, chart_min_scale, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

const fn state_color(state: TimerState) -> Color {
    match state {
        TimerState::Idle => Color::White,
        TimerState::Running => Color::Cyan,
        TimerState::Paused => Color::Yellow,
        TimerState::Completed => Color::Green,
        TimerState::Abandoned => Color::Red,
    }
}

fn render_countdown<S: KeyValueStore, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<'_, S, C>,
    area: Rect,
) {
    let state = app.timer_state();
    let color = state_color(state);

    let text = vec![
        Line::from(Span::styled(
            app.remaining(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{state} · {}", format_minutes(app.duration_minutes())),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let countdown = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" 🌊 FocusWave ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(countdown, area);
}

fn render_progress<S: KeyValueStore, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<'_, S, C>,
    area: Rect,
) {
    let progress = app.progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(state_color(app.timer_state())))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

fn render_stats(frame: &mut Frame<'_>, report: &FocusReport, chart_min_scale: f64, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    let mut streak = vec![Span::raw(report.streak_days())];
    if report.streak_broken() {
        streak.push(Span::styled(
            format!(" {BROKEN_MARKER}"),
            Style::default().fg(Color::Red),
        ));
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Today:  ", label),
            Span::raw(format_minutes(report.today_minutes)),
        ]),
        Line::from(vec![
            Span::styled("Week:   ", label),
            Span::raw(format_minutes(report.week_minutes)),
        ]),
        Line::from(vec![
            Span::styled("Month:  ", label),
            Span::raw(format_minutes(report.month_minutes)),
        ]),
        Line::from([vec![Span::styled("Streak: ", label)], streak].concat()),
        Line::from(Span::styled(
            report.title.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(next) = report.next_title() {
        lines.push(Line::from(Span::styled(
            format!("{} more to {}", next.days_needed, next.title.label()),
            label,
        )));
    }

    let stats =
        Paragraph::new(lines).block(Block::default().title(" Stats ").borders(Borders::ALL));
    frame.render_widget(stats, columns[0]);

    let chart_width = usize::from(columns[1].width.saturating_sub(18)).max(1);
    let chart = Paragraph::new(render_week_chart(
        &report.per_weekday_minutes,
        chart_min_scale,
        chart_width,
    ))
    .block(Block::default().title(" This Week ").borders(Borders::ALL));
    frame.render_widget(chart, columns[1]);
}

fn render_status_bar<S: KeyValueStore, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<'_, S, C>,
    area: Rect,
) {
    let (text, style) = match &app.status {
        Some(status @ Status::Success(_)) => (
            status.text(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(status @ Status::Failure(_)) => (
            status.text(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(status @ Status::Info(_)) => (status.text(), Style::default().fg(Color::DarkGray)),
        None => (KEY_HELP, Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
