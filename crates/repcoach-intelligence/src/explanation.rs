// ABOUTME: Builds the human-readable reason attached to a recommendation
// ABOUTME: References the most recently trained muscle groups when there are any
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use repcoach_core::constants::recommendation::EXPLANATION_WINDOW;
use repcoach_core::models::NormalizedEntry;

/// Explain why `workout` was chosen given the normalized history
#[must_use]
pub fn generate_reason(history: &[NormalizedEntry], workout: &str) -> String {
    let start = history.len().saturating_sub(EXPLANATION_WINDOW);
    let recent: Vec<&str> = history[start..]
        .iter()
        .filter_map(NormalizedEntry::usable_name)
        .collect();

    if recent.is_empty() {
        return format!(
            "{workout} helps build a balanced routine and keeps your training consistent."
        );
    }

    format!(
        "You recently trained **{}**, so **{workout}** helps balance muscle recovery and progress.",
        recent.join(", ")
    )
}
