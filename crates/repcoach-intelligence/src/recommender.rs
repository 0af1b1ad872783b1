// ABOUTME: Picks a single next workout from history using fatigue, recency, and level rules
// ABOUTME: Fatigue short-circuits to active recovery; otherwise a random unrecent catalog workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Workout recommendation
//!
//! Priority order:
//!
//! 1. Normalize history and resolve the level from the normalized entries
//!    (dates survive normalization).
//! 2. Fatigue wins over everything: a fixed 20 minute active recovery session.
//! 3. Otherwise choose uniformly among non-recovery catalog workouts that were
//!    not among the last two normalized muscle groups. If that filter leaves
//!    nothing, every non-recovery workout is a candidate again.

use chrono::{DateTime, Utc};
use repcoach_core::constants::recommendation::{
    ADVANCED_DURATION_MINUTES, BEGINNER_DURATION_MINUTES, INTERMEDIATE_DURATION_MINUTES,
    RECENT_EXCLUSION_WINDOW, RECOVERY_DURATION_MINUTES, RECOVERY_WORKOUT,
};
use repcoach_core::constants::{messages::OVERTRAINING_REASON, WORKOUT_CATALOG};
use repcoach_core::models::{
    CatalogWorkout, HistoryEntry, Intensity, Level, NormalizedEntry, Recommendation,
};
use tracing::{debug, info, instrument};

use crate::explanation::generate_reason;
use crate::fatigue::check_fatigue;
use crate::normalizer::normalize_history;
use crate::progression::determine_level_at;
use crate::random::{choose, RandomSource};

/// Recommend the next workout relative to the current time
pub fn recommend_workout<R: RandomSource + ?Sized>(
    history: &[HistoryEntry],
    rng: &mut R,
) -> Recommendation {
    recommend_workout_at(history, Utc::now(), rng)
}

/// Recommend the next workout relative to `now`
#[instrument(skip_all, fields(history_len = history.len()))]
pub fn recommend_workout_at<R: RandomSource + ?Sized>(
    history: &[HistoryEntry],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Recommendation {
    let normalized = normalize_history(history);
    let level = determine_level_at(&normalized, now);

    if check_fatigue(&normalized) {
        info!("Repeated muscle group detected, recommending active recovery");
        return active_recovery();
    }

    let recent = recent_names(&normalized);
    let candidates = select_candidates(&recent);
    let workout = choose(rng, &candidates).map_or(RECOVERY_WORKOUT, |workout| workout.name);

    Recommendation {
        workout: workout.to_owned(),
        duration: duration_for_level(level),
        intensity: Intensity::from(level),
        reason: generate_reason(&normalized, workout),
    }
}

/// Fixed recommendation returned when fatigue is detected
#[must_use]
pub fn active_recovery() -> Recommendation {
    Recommendation {
        workout: RECOVERY_WORKOUT.to_owned(),
        duration: RECOVERY_DURATION_MINUTES,
        intensity: Intensity::Low,
        reason: OVERTRAINING_REASON.to_owned(),
    }
}

/// Names of the last two normalized entries (fewer for short histories)
#[must_use]
pub fn recent_names(history: &[NormalizedEntry]) -> Vec<&str> {
    let start = history.len().saturating_sub(RECENT_EXCLUSION_WINDOW);
    history[start..]
        .iter()
        .filter_map(|entry| entry.name.as_deref())
        .collect()
}

/// Non-recovery catalog workouts not named in `exclude`
///
/// Falls back to every non-recovery workout when the exclusion empties the
/// set, so the result is never empty.
#[must_use]
pub fn select_candidates(exclude: &[&str]) -> Vec<&'static CatalogWorkout> {
    let candidates: Vec<_> = WORKOUT_CATALOG
        .iter()
        .filter(|workout| workout.is_recommendable() && !exclude.contains(&workout.name))
        .collect();

    if candidates.is_empty() {
        debug!("Every workout was trained recently, ignoring recency filter");
        return WORKOUT_CATALOG
            .iter()
            .filter(|workout| workout.is_recommendable())
            .collect();
    }

    candidates
}

/// Session length in minutes for a level
#[must_use]
pub const fn duration_for_level(level: Level) -> u32 {
    match level {
        Level::Beginner => BEGINNER_DURATION_MINUTES,
        Level::Intermediate => INTERMEDIATE_DURATION_MINUTES,
        Level::Advanced => ADVANCED_DURATION_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_recent_names_takes_last_two() {
        let history = vec![
            NormalizedEntry::named("Chest"),
            NormalizedEntry::named("Back"),
            NormalizedEntry::named("Legs"),
        ];
        assert_eq!(recent_names(&history), vec!["Back", "Legs"]);
        assert!(recent_names(&[]).is_empty());
    }

    #[test]
    fn test_select_candidates_excludes_recent_and_recovery() {
        let candidates = select_candidates(&["Chest", "Legs"]);
        let names: Vec<_> = candidates.iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Back", "Arms", "Core", "Cardio", "Full Body"]);
    }

    #[test]
    fn test_select_candidates_falls_back_when_exhausted() {
        let all: Vec<&str> = WORKOUT_CATALOG.iter().map(|w| w.name).collect();
        let candidates = select_candidates(&all);
        assert_eq!(candidates.len(), 7);
        assert!(candidates.iter().all(|w| w.is_recommendable()));
    }

    #[test]
    fn test_duration_table() {
        assert_eq!(duration_for_level(Level::Beginner), 30);
        assert_eq!(duration_for_level(Level::Intermediate), 45);
        assert_eq!(duration_for_level(Level::Advanced), 60);
    }

    #[test]
    fn test_empty_history_gets_beginner_recommendation() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let rec = recommend_workout(&[], &mut rng);
        assert_eq!(rec.duration, 30);
        assert_eq!(rec.intensity, Intensity::Beginner);
        assert_ne!(rec.workout, RECOVERY_WORKOUT);
        assert!(rec.reason.contains("balanced routine"));
    }
}
