//! Focus reports.
//!
//! Turns tracker state into the numbers and chart shown to the user.

use chrono::NaiveDate;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::aggregates::{compute_aggregates, week_start, WEEKDAY_LABELS};
use super::title::{title_for_streak, TitleTier};
use super::tracker::TrackerState;
use crate::core::format_minutes;

/// Suffix shown after a streak that can no longer be extended.
pub const BROKEN_MARKER: &str = "(broken)";

/// Focus report data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusReport {
    /// Date the totals are relative to
    pub reference_date: NaiveDate,
    /// Monday of the reported week
    pub week_start: NaiveDate,
    /// Minutes on the reference date
    pub today_minutes: f64,
    /// Minutes this ISO week
    pub week_minutes: f64,
    /// Minutes this calendar month
    pub month_minutes: f64,
    /// Minutes this week by weekday, Monday first
    pub per_weekday_minutes: [f64; 7],
    /// Stored consecutive-day streak
    pub streak: u32,
    /// Whether the streak can still be extended on the reference date
    pub streak_alive: bool,
    /// Title for the streak
    pub title: TitleTier,
    /// Date of the most recent completion
    pub last_focus_date: Option<NaiveDate>,
    /// Days with at least one completion
    pub active_days: usize,
    /// Minutes across all records
    pub total_minutes: f64,
}

/// Progress towards the next title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTitle {
    /// Tier to reach
    pub title: TitleTier,
    /// Streak days still needed
    pub days_needed: u32,
}

impl FocusReport {
    /// Build a report for `state` relative to `reference_date`.
    #[must_use]
    pub fn generate(state: &TrackerState, reference_date: NaiveDate) -> Self {
        let totals = compute_aggregates(state, reference_date);

        Self {
            reference_date,
            week_start: week_start(reference_date),
            today_minutes: totals.today_minutes,
            week_minutes: totals.week_minutes,
            month_minutes: totals.month_minutes,
            per_weekday_minutes: totals.per_weekday_minutes,
            streak: state.streak,
            streak_alive: state.streak_alive(reference_date),
            title: title_for_streak(state.streak),
            last_focus_date: state.last_focus_date,
            active_days: state.sessions.iter().filter(|s| s.minutes > 0.0).count(),
            total_minutes: state.total_minutes(),
        }
    }

    /// The next title and how many more streak days it takes.
    #[must_use]
    pub fn next_title(&self) -> Option<NextTitle> {
        self.title.next().map(|title| NextTitle {
            title,
            days_needed: title.threshold().saturating_sub(self.streak),
        })
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self, chart_min_scale: f64, chart_width: usize) -> String {
        let mut lines = Vec::new();

        lines.push(format!("🌊 Focus Report: week of {}", self.week_start).bold().to_string());
        lines.push("═".repeat(44));
        lines.push(String::new());

        lines.push(format!("  Today:       {}", format_minutes(self.today_minutes)));
        lines.push(format!("  This week:   {}", format_minutes(self.week_minutes)));
        lines.push(format!("  This month:  {}", format_minutes(self.month_minutes)));
        lines.push(format!("  Streak:      {}", self.format_streak()));
        lines.push(format!("  Title:       {}", self.title.label().cyan()));
        lines.push(String::new());

        lines.push("This Week".to_string());
        lines.push("─".repeat(44));
        lines.push(render_week_chart(
            &self.per_weekday_minutes,
            chart_min_scale,
            chart_width,
        ));

        lines.join("\n")
    }

    /// Streak length with its unit, e.g. "1 day" or "4 days".
    #[must_use]
    pub fn streak_days(&self) -> String {
        let unit = if self.streak == 1 { "day" } else { "days" };
        format!("{} {unit}", self.streak)
    }

    /// A streak was built but can no longer be extended.
    #[must_use]
    pub const fn streak_broken(&self) -> bool {
        self.streak > 0 && !self.streak_alive
    }

    /// Streak with its liveness, e.g. "4 days" or "4 days (broken)".
    #[must_use]
    pub fn format_streak(&self) -> String {
        if self.streak_broken() {
            format!("{} {}", self.streak_days(), BROKEN_MARKER.red())
        } else {
            self.streak_days()
        }
    }
}

/// Render the weekly chart, one bar per weekday.
///
/// The full-scale value is the larger of `min_scale` and the week's busiest
/// day, so a quiet week does not draw full-width bars.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_week_chart(per_weekday: &[f64; 7], min_scale: f64, width: usize) -> String {
    let scale = per_weekday.iter().copied().fold(min_scale.max(1.0), f64::max);

    WEEKDAY_LABELS
        .iter()
        .zip(per_weekday)
        .map(|(label, &minutes)| {
            let filled = ((minutes.max(0.0) / scale) * width as f64).round() as usize;
            let filled = filled.min(width);
            format!(
                "  {label} {}{} {:>4}",
                "█".repeat(filled),
                "░".repeat(width - filled),
                format_minutes(minutes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::tracker::record_completion;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_state() -> TrackerState {
        let mut state = TrackerState::default();
        state = record_completion(25.0, d(2024, 1, 8), state);
        state = record_completion(25.0, d(2024, 1, 9), state);
        state = record_completion(50.0, d(2024, 1, 10), state);
        state
    }

    #[test]
    fn test_generate() {
        let report = FocusReport::generate(&sample_state(), d(2024, 1, 10));

        assert_eq!(report.week_start, d(2024, 1, 8));
        assert!((report.today_minutes - 50.0).abs() < f64::EPSILON);
        assert!((report.week_minutes - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.streak, 3);
        assert!(report.streak_alive);
        assert_eq!(report.title, TitleTier::DriftingTraveler);
        assert_eq!(report.active_days, 3);
    }

    #[test]
    fn test_broken_streak_flagged() {
        let report = FocusReport::generate(&sample_state(), d(2024, 1, 20));
        assert_eq!(report.streak, 3);
        assert!(!report.streak_alive);
        assert!(report.format_streak().contains("broken"));
    }

    #[test]
    fn test_next_title() {
        let report = FocusReport::generate(&sample_state(), d(2024, 1, 10));
        let next = report.next_title().unwrap();
        assert_eq!(next.title, TitleTier::WaveRider);
        assert_eq!(next.days_needed, 4);

        let mut top = report;
        top.streak = 45;
        top.title = title_for_streak(45);
        assert!(top.next_title().is_none());
    }

    #[test]
    fn test_week_chart_min_scale() {
        let mut week = [0.0; 7];
        week[0] = 15.0;

        let chart = render_week_chart(&week, 30.0, 10);
        let monday = chart.lines().next().unwrap();
        assert!(monday.contains("█████░░░░░"));
        assert_eq!(chart.lines().count(), 7);
    }

    #[test]
    fn test_week_chart_scales_to_busiest_day() {
        let mut week = [0.0; 7];
        week[2] = 120.0;
        week[3] = 60.0;

        let chart = render_week_chart(&week, 30.0, 10);
        let lines: Vec<_> = chart.lines().collect();
        assert!(lines[2].contains(&"█".repeat(10)));
        assert!(lines[3].contains("█████░░░░░"));
        assert!(lines[3].contains("1h 0m"));
    }

    #[test]
    fn test_format_mentions_title() {
        colored::control::set_override(false);
        let report = FocusReport::generate(&sample_state(), d(2024, 1, 10));
        let text = report.format(30.0, 10);

        assert!(text.contains("week of 2024-01-08"));
        assert!(text.contains("Drifting Traveler of Focus"));
        assert!(text.contains("Wed"));
    }
}
