// ABOUTME: Classifies the user's training level from session frequency in the trailing week
// ABOUTME: Tolerates missing or unparseable dates by leaving those sessions out of the count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use repcoach_core::constants::progression::{INTERMEDIATE_MIN_SESSIONS, RECENT_WINDOW_DAYS};
use repcoach_core::models::{HistoryEntry, Level, NormalizedEntry};
use tracing::debug;

/// Anything that may carry a session date
pub trait SessionDate {
    /// Raw ISO-8601 date string, if present
    fn session_date(&self) -> Option<&str>;
}

impl SessionDate for HistoryEntry {
    fn session_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl SessionDate for NormalizedEntry {
    fn session_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Level from history relative to the current time
#[must_use]
pub fn determine_level<T: SessionDate>(history: &[T]) -> Level {
    determine_level_at(history, Utc::now())
}

/// Level from history relative to `now`
///
/// Empty history is `beginner`. Three or more sessions dated strictly after
/// `now - 7 days` is `intermediate`, anything else `beginner`. `advanced` is
/// never produced here.
#[must_use]
pub fn determine_level_at<T: SessionDate>(history: &[T], now: DateTime<Utc>) -> Level {
    if history.is_empty() {
        return Level::Beginner;
    }

    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent_sessions = history
        .iter()
        .filter_map(SessionDate::session_date)
        .filter_map(parse_session_date)
        .filter(|date| *date > window_start)
        .count();

    let level = if recent_sessions >= INTERMEDIATE_MIN_SESSIONS {
        Level::Intermediate
    } else {
        Level::Beginner
    };
    debug!(recent_sessions, %level, "Resolved training level");
    level
}

/// Parse an ISO-8601 date or datetime
///
/// Accepts RFC 3339 (converted to UTC), naive datetimes with `T` or space
/// separators (taken as UTC), and bare dates (midnight UTC).
#[must_use]
pub fn parse_session_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn dated(date: &str) -> HistoryEntry {
        HistoryEntry::named("Squats").with_date(date)
    }

    #[test]
    fn test_empty_history_is_beginner() {
        let history: Vec<HistoryEntry> = Vec::new();
        assert_eq!(determine_level_at(&history, now()), Level::Beginner);
    }

    #[test]
    fn test_three_recent_sessions_is_intermediate() {
        let history = vec![
            dated("2025-06-10"),
            dated("2025-06-12T18:30:00"),
            dated("2025-06-14T07:00:00Z"),
        ];
        assert_eq!(determine_level_at(&history, now()), Level::Intermediate);
    }

    #[test]
    fn test_old_sessions_do_not_count() {
        let history = vec![
            dated("2025-05-01"),
            dated("2025-06-01"),
            dated("2025-06-08T11:59:00"),
            dated("2025-06-14"),
        ];
        assert_eq!(determine_level_at(&history, now()), Level::Beginner);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let history = vec![
            dated("2025-06-08T12:00:00"),
            dated("2025-06-13"),
            dated("2025-06-14"),
        ];
        assert_eq!(determine_level_at(&history, now()), Level::Beginner);
    }

    #[test]
    fn test_undated_and_garbage_dates_are_skipped() {
        let history = vec![
            HistoryEntry::named("Squats"),
            dated("yesterday"),
            dated("2025-06-13"),
            dated("2025-06-14"),
        ];
        assert_eq!(determine_level_at(&history, now()), Level::Beginner);
    }

    #[test]
    fn test_normalized_entries_keep_dates_for_leveling() {
        let history: Vec<NormalizedEntry> = ["2025-06-11", "2025-06-12", "2025-06-13"]
            .into_iter()
            .map(|date| NormalizedEntry {
                name: Some("Legs".into()),
                date: Some(date.into()),
            })
            .collect();
        assert_eq!(determine_level_at(&history, now()), Level::Intermediate);
    }

    #[test]
    fn test_parse_offsets_convert_to_utc() {
        let parsed = parse_session_date("2025-06-14T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_session_date("2025-06-14T10:15:30.123").is_some());
        assert!(parse_session_date("2025-06-14 10:15:30").is_some());
    }
}
