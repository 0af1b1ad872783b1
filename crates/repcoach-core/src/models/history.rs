// ABOUTME: Workout history entries as supplied by clients and their normalized muscle-group form
// ABOUTME: Both shapes tolerate missing fields; nothing here ever rejects a history entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One completed exercise or session, oldest entries first in a history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Exercise or muscle-group name; absent or non-string names flow through as `None`
    #[serde(default, deserialize_with = "string_or_absent")]
    pub name: Option<String>,
    /// ISO-8601 date or datetime of the session
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

/// Accept any JSON value, keeping only strings
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl HistoryEntry {
    /// Entry with a name and no date
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date: None,
        }
    }

    /// Attach a date to this entry
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// History entry whose name has been mapped to a muscle-group label
///
/// The session date is carried through normalization so that recency-based
/// leveling sees the same dates as the raw history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    /// Muscle-group label, or the original name when it is not in the muscle map
    #[serde(default)]
    pub name: Option<String>,
    /// Date copied verbatim from the raw entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl NormalizedEntry {
    /// Entry with a muscle-group name and no date
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date: None,
        }
    }

    /// Name as a non-empty string slice, if any
    #[must_use]
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_non_string_fields_are_absent() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"name":42,"date":20250101}"#).unwrap();
        assert_eq!(entry, HistoryEntry::default());

        let entry: HistoryEntry =
            serde_json::from_str(r#"{"name":"Squats","date":{"day":1}}"#).unwrap();
        assert_eq!(entry, HistoryEntry::named("Squats"));
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(entry, HistoryEntry::default());

        let entry: HistoryEntry = serde_json::from_str(r#"{"date":"2025-01-01"}"#).unwrap();
        assert_eq!(entry.date.as_deref(), Some("2025-01-01"));
        assert!(entry.name.is_none());
    }
}
