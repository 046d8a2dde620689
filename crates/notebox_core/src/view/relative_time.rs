//! Human-friendly "time ago" labels.
//!
//! Buckets are computed from the difference against `now`; nothing is
//! cached, so a label changes as time passes.

use chrono::{DateTime, Local, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Formats `at` relative to the current time.
pub fn format_relative(at: DateTime<Utc>) -> String {
    format_relative_at(at, Utc::now())
}

/// Formats `at` relative to `now`.
///
/// - under an hour: `N minute(s) ago`
/// - under a day: `N hour(s) ago`
/// - one day: `Yesterday`
/// - two to six days: `N days ago`
/// - otherwise: [`locale_date`]
///
/// Timestamps in the future are treated as `now`.
pub fn format_relative_at(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - at).num_milliseconds().max(0);
    let days = elapsed_ms / DAY_MS;

    match days {
        0 => {
            let hours = elapsed_ms / HOUR_MS;
            if hours == 0 {
                plural_ago(elapsed_ms / MINUTE_MS, "minute")
            } else {
                plural_ago(hours, "hour")
            }
        }
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => locale_date(at),
    }
}

/// Short numeric date in the local time zone, e.g. `5/1/2024`.
pub fn locale_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

fn plural_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_relative_at, locale_date};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn singular_units_have_no_plural_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(
            format_relative_at(now - Duration::minutes(1), now),
            "1 minute ago"
        );
        assert_eq!(format_relative_at(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative_at(now - Duration::hours(5), now), "5 hours ago");
    }

    #[test]
    fn day_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(format_relative_at(now - Duration::hours(47), now), "Yesterday");
        assert_eq!(format_relative_at(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_relative_at(now - Duration::days(6), now), "6 days ago");
        let week_old = now - Duration::days(7);
        assert_eq!(format_relative_at(week_old, now), locale_date(week_old));
    }

    #[test]
    fn future_timestamps_clamp_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(
            format_relative_at(now + Duration::hours(3), now),
            "0 minutes ago"
        );
    }
}
