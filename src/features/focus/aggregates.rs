//! Rolling totals over the tracker's daily records.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::tracker::TrackerState;

/// Weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Focus minutes around a reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Minutes on the reference date.
    pub today_minutes: f64,
    /// Minutes in the ISO week (Monday start) containing the reference date.
    pub week_minutes: f64,
    /// Minutes in the reference date's calendar month.
    pub month_minutes: f64,
    /// `week_minutes` split by weekday, Monday = 0 ... Sunday = 6.
    pub per_weekday_minutes: [f64; 7],
}

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Sum the tracker's records into today/week/month totals relative to
/// `reference_date`.
#[must_use]
pub fn compute_aggregates(state: &TrackerState, reference_date: NaiveDate) -> Aggregates {
    let start = week_start(reference_date);
    let end = start + Duration::days(7);

    let mut totals = Aggregates::default();

    for record in &state.sessions {
        let date = record.date;

        if date == reference_date {
            totals.today_minutes += record.minutes;
        }

        if date >= start && date < end {
            totals.week_minutes += record.minutes;
            totals.per_weekday_minutes[date.weekday().num_days_from_monday() as usize] +=
                record.minutes;
        }

        if date.year() == reference_date.year() && date.month() == reference_date.month() {
            totals.month_minutes += record.minutes;
        }
    }

    totals
}
