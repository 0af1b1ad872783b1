// ABOUTME: Maps raw history entries to muscle-group entries through the muscle map
// ABOUTME: Unknown names and missing names pass through unchanged, dates are carried along
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use repcoach_core::constants::muscle_group_for;
use repcoach_core::models::{HistoryEntry, NormalizedEntry};

/// Normalize a history, preserving length and order
#[must_use]
pub fn normalize_history(history: &[HistoryEntry]) -> Vec<NormalizedEntry> {
    history.iter().map(normalize_entry).collect()
}

fn normalize_entry(entry: &HistoryEntry) -> NormalizedEntry {
    let name = entry.name.as_deref().map(|name| {
        muscle_group_for(name).map_or_else(|| name.to_owned(), |group| group.label().to_owned())
    });

    NormalizedEntry {
        name,
        date: entry.date.clone(),
    }
}
