//! JSON output formatting for focuswave.

use serde::Serialize;
use serde_json::json;

use crate::error::FocusError;
use crate::features::focus::{FocusReport, SessionRecord, TitleTier};

/// Format day records as JSON
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[&SessionRecord]) -> Result<String, FocusError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the streak section of a report as JSON
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_streak_json(report: &FocusReport) -> Result<String, FocusError> {
    let output = json!({
        "streak": report.streak,
        "streakAlive": report.streak_alive,
        "lastFocusDate": report.last_focus_date,
        "title": report.title,
        "titleLabel": report.title.label(),
        "next": report.next_title(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the title table as JSON
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_titles_json(current: TitleTier) -> Result<String, FocusError> {
    let items: Vec<_> = TitleTier::ALL
        .iter()
        .map(|tier| {
            json!({
                "tier": tier,
                "rank": tier.rank(),
                "label": tier.label(),
                "minStreak": tier.threshold(),
                "current": *tier == current,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&json!({ "items": items }))?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}
