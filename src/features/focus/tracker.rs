//! Daily focus-minute log and streak bookkeeping.
//!
//! [`TrackerState`] is a plain value. [`record_completion`] is the only way it
//! changes, and it never touches storage or the clock; the controller decides
//! when to persist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completed focus minutes for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Accumulated minutes of completed intervals on that date.
    #[serde(default)]
    pub minutes: f64,
}

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    /// One record per date, in insertion order.
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    /// Consecutive calendar days ending at `last_focus_date`.
    #[serde(default)]
    pub streak: u32,
    /// Date of the most recent completion.
    #[serde(default)]
    pub last_focus_date: Option<NaiveDate>,
}

impl TrackerState {
    /// Total minutes across every record.
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.sessions.iter().map(|s| s.minutes).sum()
    }

    /// Records sorted most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<&SessionRecord> {
        let mut records: Vec<_> = self.sessions.iter().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Whether the streak can still be extended on `today`, i.e. the last
    /// completion was today or yesterday.
    #[must_use]
    pub fn streak_alive(&self, today: NaiveDate) -> bool {
        self.last_focus_date
            .is_some_and(|last| matches!((today - last).num_days(), 0 | 1))
    }
}

/// Record a completed focus interval of `duration_minutes` on
/// `completion_date` and return the updated state.
///
/// Same-day completions accumulate into one record. The streak grows by one
/// on the day after `last_focus_date`, restarts at 1 after a longer gap, and
/// is left alone for a repeat completion on the same day. A date earlier than
/// `last_focus_date` credits its minutes but leaves the streak and
/// `last_focus_date` as they were. Non-positive or non-finite durations leave
/// the state untouched.
#[must_use]
pub fn record_completion(
    duration_minutes: f64,
    completion_date: NaiveDate,
    mut state: TrackerState,
) -> TrackerState {
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        tracing::debug!(duration_minutes, "ignoring non-positive completion");
        return state;
    }

    match state
        .sessions
        .iter_mut()
        .find(|s| s.date == completion_date)
    {
        Some(existing) => existing.minutes += duration_minutes,
        None => state.sessions.push(SessionRecord {
            date: completion_date,
            minutes: duration_minutes,
        }),
    }

    let gap = state
        .last_focus_date
        .map(|last| (completion_date - last).num_days());

    // A date before the last completion only adds minutes
    if gap.is_some_and(|gap| gap < 0) {
        return state;
    }

    state.streak = match gap {
        None => 1,
        Some(1) => state.streak.saturating_add(1),
        Some(gap) if gap > 1 => 1,
        Some(_) => state.streak,
    };
    state.last_focus_date = Some(completion_date);

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_completion() {
        let state = record_completion(25.0, d(2024, 1, 1), TrackerState::default());

        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].date, d(2024, 1, 1));
        assert!((state.sessions[0].minutes - 25.0).abs() < f64::EPSILON);
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_focus_date, Some(d(2024, 1, 1)));
    }

    #[test]
    fn test_same_day_accumulates() {
        let state = record_completion(25.0, d(2024, 1, 1), TrackerState::default());
        let state = record_completion(10.0, d(2024, 1, 1), state);

        assert_eq!(state.sessions.len(), 1);
        assert!((state.sessions[0].minutes - 35.0).abs() < f64::EPSILON);
        assert_eq!(state.streak, 1);
    }

    #[test]
    fn test_consecutive_days_increment_streak() {
        let mut state = TrackerState::default();
        for (i, day) in [1, 2, 3].into_iter().enumerate() {
            state = record_completion(25.0, d(2024, 1, day), state);
            assert_eq!(state.streak as usize, i + 1);
        }
        assert_eq!(state.sessions.len(), 3);
    }

    #[test]
    fn test_gap_resets_streak() {
        let state = TrackerState {
            sessions: vec![],
            streak: 12,
            last_focus_date: Some(d(2024, 1, 1)),
        };

        let state = record_completion(25.0, d(2024, 1, 3), state);
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_focus_date, Some(d(2024, 1, 3)));
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let state = record_completion(25.0, d(2024, 1, 31), TrackerState::default());
        let state = record_completion(25.0, d(2024, 2, 1), state);
        assert_eq!(state.streak, 2);
    }

    #[test]
    fn test_earlier_date_keeps_streak() {
        let state = TrackerState {
            sessions: vec![],
            streak: 4,
            last_focus_date: Some(d(2024, 1, 10)),
        };

        let state = record_completion(5.0, d(2024, 1, 8), state);
        assert_eq!(state.streak, 4);
        assert_eq!(state.last_focus_date, Some(d(2024, 1, 10)));
        assert_eq!(state.sessions.len(), 1);
    }

    #[test]
    fn test_alternating_backfill_never_outgrows_active_days() {
        let mut state = TrackerState::default();
        for day in [10, 9, 10, 9, 10, 9, 10] {
            state = record_completion(25.0, d(2024, 1, day), state);
            assert!(state.streak <= u32::try_from(state.sessions.len()).unwrap());
        }

        assert_eq!(state.sessions.len(), 2);
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_focus_date, Some(d(2024, 1, 10)));

        let state = record_completion(25.0, d(2024, 1, 11), state);
        assert_eq!(state.streak, 2);
    }

    #[test]
    fn test_non_positive_duration_is_noop() {
        let before = record_completion(25.0, d(2024, 1, 1), TrackerState::default());

        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let after = record_completion(bad, d(2024, 1, 2), before.clone());
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_json_layout() {
        let state = record_completion(25.0, d(2024, 1, 1), TrackerState::default());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["sessions"][0]["date"], "2024-01-01");
        assert_eq!(json["sessions"][0]["minutes"], 25.0);
        assert_eq!(json["streak"], 1);
        assert_eq!(json["lastFocusDate"], "2024-01-01");

        let empty = serde_json::to_value(TrackerState::default()).unwrap();
        assert!(empty["lastFocusDate"].is_null());
    }

    #[test]
    fn test_missing_fields_default() {
        let state: TrackerState =
            serde_json::from_str(r#"{"sessions":[{"date":"2024-01-01"}]}"#).unwrap();

        assert_eq!(state.streak, 0);
        assert!(state.last_focus_date.is_none());
        assert!(state.sessions[0].minutes.abs() < f64::EPSILON);
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut state = TrackerState::default();
        state = record_completion(10.0, d(2024, 1, 5), state);
        state = record_completion(10.0, d(2024, 1, 2), state);
        state = record_completion(10.0, d(2024, 1, 9), state);

        let dates: Vec<_> = state.history().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 9), d(2024, 1, 5), d(2024, 1, 2)]);
    }

    #[test]
    fn test_streak_alive() {
        let state = record_completion(25.0, d(2024, 1, 10), TrackerState::default());

        assert!(state.streak_alive(d(2024, 1, 10)));
        assert!(state.streak_alive(d(2024, 1, 11)));
        assert!(!state.streak_alive(d(2024, 1, 12)));
        assert!(!TrackerState::default().streak_alive(d(2024, 1, 10)));
    }
}
