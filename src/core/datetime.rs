//! Date and duration parsing for command-line input.

use chrono::{Duration, NaiveDate};

/// Parse a calendar date relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `yesterday`, and `N days ago` / `Nd`.
#[must_use]
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = input.trim().to_lowercase();

    match s.as_str() {
        "today" | "t" => return Some(today),
        "yesterday" | "y" => return today.pred_opt(),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Some(date);
    }

    let days = s
        .strip_suffix(" days ago")
        .or_else(|| s.strip_suffix(" day ago"))
        .or_else(|| s.strip_suffix('d'))?
        .trim()
        .parse::<i64>()
        .ok()?;

    if days < 0 {
        return None;
    }
    today.checked_sub_signed(Duration::try_days(days)?)
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is taken as minutes. Returns `None` for empty, malformed,
/// zero-length, or out-of-range input.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<f64>() {
        if !minutes.is_finite() || minutes <= 0.0 {
            return None;
        }
        let millis = (minutes * 60_000.0).round();
        if !(1.0..9.0e18).contains(&millis) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let millis = millis as i64;
        return Duration::try_milliseconds(millis);
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    // Trailing number without unit is minutes
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds > 0 {
        Duration::try_seconds(total_seconds)
    } else {
        None
    }
}

/// Format a duration in minutes as a human-readable string.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let total = minutes.max(0.0).round() as i64;
    let hours = total / 60;
    let mins = total % 60;

    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date_keywords() {
        let today = d(2024, 3, 1);
        assert_eq!(parse_date("today", today), Some(today));
        assert_eq!(parse_date("Yesterday", today), Some(d(2024, 2, 29)));
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2024-01-10", d(2030, 1, 1)), Some(d(2024, 1, 10)));
        assert_eq!(parse_date("2024-13-10", d(2030, 1, 1)), None);
    }

    #[test]
    fn test_parse_date_relative() {
        let today = d(2024, 1, 10);
        assert_eq!(parse_date("3 days ago", today), Some(d(2024, 1, 7)));
        assert_eq!(parse_date("1 day ago", today), Some(d(2024, 1, 9)));
        assert_eq!(parse_date("2d", today), Some(d(2024, 1, 8)));
        assert_eq!(parse_date("soon", today), None);
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("0.5"), Some(Duration::seconds(30)));
    }

    #[test]
    fn test_parse_duration_compound() {
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2h30m"), Some(Duration::minutes(150)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_out_of_range() {
        assert!(parse_duration("9999999999999999s").is_none());
        assert!(parse_duration("9999999999999999h").is_none());
        assert!(parse_duration("9999999999999999m").is_none());
        assert!(parse_duration("1h9999999999999999").is_none());
        assert!(parse_duration("99999999999999999999s").is_none());
        assert!(parse_duration("1e300").is_none());
        assert!(parse_duration("0.000001").is_none());
        assert_eq!(parse_duration("100h"), Some(Duration::hours(100)));
    }

    #[test]
    fn test_parse_date_out_of_range() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(parse_date("9999999999999999d", today).is_none());
        assert!(parse_date("999999999 days ago", today).is_none());
    }

    #[test]
    fn test_parse_duration_rejects_non_positive() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("-5").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("10x").is_none());
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(25.0), "25m");
        assert_eq!(format_minutes(90.0), "1h 30m");
        assert_eq!(format_minutes(0.0), "0m");
        assert_eq!(format_minutes(12.6), "13m");
    }
}
