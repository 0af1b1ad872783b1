// ABOUTME: Overtraining heuristic over the most recent normalized sessions
// ABOUTME: Three identical muscle groups in a row means the user should recover
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use repcoach_core::constants::fatigue::FATIGUE_WINDOW;
use repcoach_core::models::NormalizedEntry;

/// True when the last three entries carry the same name
///
/// Histories shorter than the window never signal fatigue. Names compare
/// exactly, and a run of nameless entries counts as a streak too.
#[must_use]
pub fn check_fatigue(history: &[NormalizedEntry]) -> bool {
    if history.len() < FATIGUE_WINDOW {
        return false;
    }

    let recent = &history[history.len() - FATIGUE_WINDOW..];
    let first = recent[0].name.as_deref();
    recent.iter().all(|entry| entry.name.as_deref() == first)
}
