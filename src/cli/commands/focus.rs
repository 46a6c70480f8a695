//! Focus command implementations.

use chrono::NaiveDate;
use colored::Colorize;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::core::{format_minutes, parse_date, parse_duration, Clock};
use crate::error::FocusError;
use crate::features::focus::{FocusController, FocusReport};
use crate::output::{format_history, format_streak, format_titles, to_json};
use crate::storage::KeyValueStore;
use crate::tui;

/// Run a focus interval in the terminal UI.
///
/// # Errors
///
/// Returns an error if the duration is invalid, the store cannot be opened,
/// or the terminal cannot be driven.
pub fn start(ctx: &Context, duration: Option<&str>) -> Result<String, FocusError> {
    let mut controller = ctx.controller()?;

    if let Some(input) = duration {
        let parsed = parse_duration(input)
            .ok_or_else(|| FocusError::InvalidInput(format!("Invalid duration: {input}")))?;
        controller.set_duration(parsed);
    }

    let summary = tui::run(&mut controller, &ctx.config)?;
    let report = controller.report();

    match ctx.format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "completed": summary.completed,
            "abandoned": summary.abandoned,
            "timer": controller.timer_snapshot(),
            "report": report,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!(
                "🌊 {} completed, {} abandoned this run",
                summary.completed, summary.abandoned
            ));
            output.push(format!(
                "   Today: {}  |  Streak: {}",
                format_minutes(report.today_minutes),
                report.format_streak()
            ));
            output.push(format!("   Title: {}", report.title.label().cyan()));
            Ok(output.join("\n"))
        }
    }
}

/// Record a completed interval without running the timer.
///
/// # Errors
///
/// Returns an error if the duration or date cannot be parsed, or the state
/// cannot be persisted.
pub fn record(ctx: &Context, duration: &str, date: Option<&str>) -> Result<String, FocusError> {
    let mut controller = ctx.controller()?;
    record_with(&mut controller, duration, date, ctx.format)
}

fn record_with<S: KeyValueStore, C: Clock>(
    controller: &mut FocusController<S, C>,
    duration: &str,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let parsed = parse_duration(duration)
        .ok_or_else(|| FocusError::InvalidInput(format!("Invalid duration: {duration}")))?;
    #[allow(clippy::cast_precision_loss)]
    let minutes = parsed.num_milliseconds() as f64 / 60_000.0;

    let today = controller.clock().today();
    let date = resolve_date(date, today)?;

    controller.record(minutes, date)?;
    let report = controller.report();

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(
                format!("✅ Recorded {} for {date}", format_minutes(minutes))
                    .green()
                    .to_string(),
            );
            output.push(format!("   Streak: {}", report.format_streak()));
            output.push(format!("   Title:  {}", report.title.label().cyan()));
            Ok(output.join("\n"))
        }
    }
}

/// Show totals relative to a reference date.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed or the store cannot be opened.
pub fn stats(ctx: &Context, date: Option<&str>) -> Result<String, FocusError> {
    let controller = ctx.controller()?;
    let reference = resolve_date(date, controller.clock().today())?;
    let report = controller.report_for(reference);
    render_report(&report, ctx)
}

fn render_report(report: &FocusReport, ctx: &Context) -> Result<String, FocusError> {
    match ctx.format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Pretty => Ok(report.format(
            f64::from(ctx.config.stats.chart_min_scale_minutes),
            ctx.config.stats.chart_width,
        )),
    }
}

/// Show the current streak and title.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn streak(ctx: &Context) -> Result<String, FocusError> {
    let controller = ctx.controller()?;
    format_streak(&controller.report(), ctx.format)
}

/// List the title tiers.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn titles(ctx: &Context) -> Result<String, FocusError> {
    let controller = ctx.controller()?;
    format_titles(controller.report().title, ctx.format)
}

/// Show recorded days, most recent first.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn history(ctx: &Context, limit: usize) -> Result<String, FocusError> {
    let controller = ctx.controller()?;
    let records: Vec<_> = controller
        .state()
        .history()
        .into_iter()
        .take(limit)
        .collect();
    format_history(&records, ctx.format)
}

fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate, FocusError> {
    match input {
        None => Ok(today),
        Some(s) => parse_date(s, today)
            .ok_or_else(|| FocusError::InvalidInput(format!("Invalid date: {s}"))),
    }
}
