// ABOUTME: Builds a seven-day training plan from history, level, and optional preferences
// ABOUTME: Days are filled by sampling muscle-map exercises according to the split table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use chrono::{DateTime, Utc};
use repcoach_core::constants::exercises_for;
use repcoach_core::constants::goal_parameters::{BUILD_MUSCLE, ENDURANCE, LOSE_WEIGHT, STRENGTH};
use repcoach_core::constants::plan_defaults::{
    ADVANCED_DAYS_PER_WEEK, DEFAULT_DAYS_PER_WEEK, INTERMEDIATE_DAYS_PER_WEEK, SETS_PER_EXERCISE,
};
use repcoach_core::models::{
    DayFocus, DayOfWeek, DaySchedule, ExercisePrescription, Goal, HistoryEntry, Level,
    Preferences, WeeklyPlan, WeeklySchedule,
};
use tracing::{debug, instrument};

use crate::normalizer::normalize_history;
use crate::progression::determine_level_at;
use crate::random::{sample_without_replacement, RandomSource};
use crate::splits::{draws_for, split_label, week_for};

/// Repetitions and rest seconds applied to every exercise in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalParameters {
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest: u32,
}

/// Generate a weekly plan relative to the current time
pub fn generate_weekly_plan<R: RandomSource + ?Sized>(
    history: &[HistoryEntry],
    preferences: Option<&Preferences>,
    rng: &mut R,
) -> WeeklyPlan {
    generate_weekly_plan_at(history, preferences, Utc::now(), rng)
}

/// Generate a weekly plan relative to `now`
#[instrument(skip_all, fields(history_len = history.len(), has_preferences = preferences.is_some()))]
pub fn generate_weekly_plan_at<R: RandomSource + ?Sized>(
    history: &[HistoryEntry],
    preferences: Option<&Preferences>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> WeeklyPlan {
    let normalized = normalize_history(history);
    let level = determine_level_at(&normalized, now);
    let (target_days, goal) = resolve_targets(level, preferences);
    let params = goal_parameters(goal);

    let mut schedule = WeeklySchedule::all_rest();
    for (day, focus) in DayOfWeek::ALL.into_iter().zip(week_for(target_days)) {
        if !focus.is_rest() {
            schedule.set(day, build_day(focus, params, rng));
        }
    }

    debug!(
        %level,
        target_days,
        active_days = schedule.active_days(),
        "Generated weekly plan"
    );

    WeeklyPlan {
        level,
        split: split_label(target_days),
        schedule,
    }
}

/// Training days and goal to plan for
///
/// Preferences, when present, fully override the level-derived defaults.
#[must_use]
pub const fn resolve_targets(level: Level, preferences: Option<&Preferences>) -> (u32, Goal) {
    if let Some(preferences) = preferences {
        return (preferences.days_per_week, preferences.goal);
    }

    let days = match level {
        Level::Beginner => DEFAULT_DAYS_PER_WEEK,
        Level::Intermediate => INTERMEDIATE_DAYS_PER_WEEK,
        Level::Advanced => ADVANCED_DAYS_PER_WEEK,
    };
    (days, Goal::BuildMuscle)
}

/// Reps and rest for a goal
#[must_use]
pub const fn goal_parameters(goal: Goal) -> GoalParameters {
    let (reps, rest) = match goal {
        Goal::BuildMuscle => BUILD_MUSCLE,
        Goal::LoseWeight => LOSE_WEIGHT,
        Goal::Strength => STRENGTH,
        Goal::Endurance => ENDURANCE,
    };
    GoalParameters { reps, rest }
}

fn build_day<R: RandomSource + ?Sized>(
    focus: DayFocus,
    params: GoalParameters,
    rng: &mut R,
) -> DaySchedule {
    let mut exercises = Vec::new();
    for &(group, count) in draws_for(focus) {
        let pool = exercises_for(group);
        for name in sample_without_replacement(rng, &pool, count) {
            exercises.push(ExercisePrescription {
                id: rng.exercise_id(),
                name: name.to_owned(),
                sets: SETS_PER_EXERCISE,
                reps: params.reps,
                rest: params.rest,
            });
        }
    }

    DaySchedule {
        muscle: focus.label().to_owned(),
        exercises,
    }
}
