//! Human-readable relative timestamps

use chrono::{DateTime, Utc};

/// Describe how long ago `then` was, relative to `now`
///
/// Whole days are counted; weeks, months and years use 7, 30 and 365 day
/// buckets. Timestamps in the future read as "today".
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - then).num_days();

    match days {
        d if d <= 0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => plural(d / 7, "week"),
        d if d < 365 => plural(d / 30, "month"),
        d => plural(d / 365, "year"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(days: i64) -> String {
        let now: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        format_relative_time(now - Duration::days(days), now)
    }

    #[test]
    fn buckets() {
        assert_eq!(ago(0), "today");
        assert_eq!(ago(1), "1 day ago");
        assert_eq!(ago(6), "6 days ago");
        assert_eq!(ago(7), "1 week ago");
        assert_eq!(ago(29), "4 weeks ago");
        assert_eq!(ago(30), "1 month ago");
        assert_eq!(ago(364), "12 months ago");
        assert_eq!(ago(365), "1 year ago");
        assert_eq!(ago(800), "2 years ago");
    }

    #[test]
    fn partial_days_round_down() {
        let now: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        let then = now - Duration::hours(23);
        assert_eq!(format_relative_time(then, now), "today");
    }

    #[test]
    fn future_reads_as_today() {
        assert_eq!(ago(-3), "today");
    }
}
