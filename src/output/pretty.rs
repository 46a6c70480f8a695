//! Pretty (human-readable) output formatting for focuswave.

use colored::Colorize;

use crate::core::format_minutes;
use crate::features::focus::{FocusReport, SessionRecord, TitleTier};

/// Format day records as a table, most recent first.
#[must_use]
pub fn format_history_pretty(records: &[&SessionRecord]) -> String {
    if records.is_empty() {
        return "No focus sessions recorded yet.\n\nStart one with: focuswave start".to_string();
    }

    let mut lines = Vec::new();
    lines.push("📋 Focus History".bold().to_string());
    lines.push("═".repeat(30));
    lines.push(format!("{:<12} {:>10}", "Date", "Focus"));
    lines.push("─".repeat(30));

    for record in records {
        lines.push(format!(
            "{:<12} {:>10}",
            record.date.format("%Y-%m-%d"),
            format_minutes(record.minutes)
        ));
    }

    lines.join("\n")
}

/// Format the streak, title, and progress towards the next title.
#[must_use]
pub fn format_streak_pretty(report: &FocusReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("🔥 Streak: {}", report.format_streak()));
    lines.push(format!("   Title:  {}", report.title.label().cyan().bold()));

    match report.last_focus_date {
        Some(date) => lines.push(format!("   Last focus: {date}")),
        None => lines.push("   Last focus: never".dimmed().to_string()),
    }

    if let Some(next) = report.next_title() {
        let unit = if next.days_needed == 1 { "day" } else { "days" };
        lines.push(String::new());
        lines.push(
            format!(
                "   {} more {unit} to earn \"{}\"",
                next.days_needed,
                next.title.label()
            )
            .dimmed()
            .to_string(),
        );
    }

    lines.join("\n")
}

/// Format the title table, highlighting the current tier.
#[must_use]
pub fn format_titles_pretty(current: TitleTier) -> String {
    let mut lines = Vec::new();
    lines.push("🏅 Titles".bold().to_string());
    lines.push("─".repeat(44));

    for tier in TitleTier::ALL {
        let line = format!("  {:>3}+ days  {}", tier.threshold(), tier.label());
        if tier == current {
            lines.push(format!("{}  {}", line.green().bold(), "◀ you".green()));
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}
