// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data tables and thresholds used by the recommendation and planning rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Constants module
//!
//! Rule tables are grouped by domain. Everything here is immutable and shared
//! across requests.

/// Exercise name to muscle group mapping
pub mod muscle_map;

/// Ordered workout catalog used for single-workout recommendations
pub mod catalog;

pub use catalog::WORKOUT_CATALOG;
pub use muscle_map::{exercises_for, muscle_group_for, MUSCLE_MAP};

/// Fatigue detection thresholds
pub mod fatigue {
    /// Number of most recent entries that must share one muscle group
    pub const FATIGUE_WINDOW: usize = 3;
}

/// Progression leveling thresholds
pub mod progression {
    /// Trailing window, in days, for counting recent sessions
    pub const RECENT_WINDOW_DAYS: i64 = 7;
    /// Recent sessions required for the intermediate level
    pub const INTERMEDIATE_MIN_SESSIONS: usize = 3;
}

/// Recommendation sizing
pub mod recommendation {
    /// Number of most recent normalized entries excluded from candidates
    pub const RECENT_EXCLUSION_WINDOW: usize = 2;
    /// Number of most recent muscle groups named in the explanation
    pub const EXPLANATION_WINDOW: usize = 2;
    /// Workout returned when fatigue is detected
    pub const RECOVERY_WORKOUT: &str = "Active Recovery";
    /// Active recovery session length in minutes
    pub const RECOVERY_DURATION_MINUTES: u32 = 20;
    /// Beginner session length in minutes
    pub const BEGINNER_DURATION_MINUTES: u32 = 30;
    /// Intermediate session length in minutes
    pub const INTERMEDIATE_DURATION_MINUTES: u32 = 45;
    /// Advanced session length in minutes
    pub const ADVANCED_DURATION_MINUTES: u32 = 60;
}

/// Weekly plan defaults
pub mod plan_defaults {
    /// Days per week when preferences omit it, and for beginners
    pub const DEFAULT_DAYS_PER_WEEK: u32 = 3;
    /// Days per week derived for intermediate users without preferences
    pub const INTERMEDIATE_DAYS_PER_WEEK: u32 = 4;
    /// Days per week derived for advanced users without preferences
    pub const ADVANCED_DAYS_PER_WEEK: u32 = 6;
    /// Sets per prescribed exercise
    pub const SETS_PER_EXERCISE: u32 = 3;
    /// Smallest generated exercise id
    pub const EXERCISE_ID_MIN: u32 = 10_000;
    /// Largest generated exercise id
    pub const EXERCISE_ID_MAX: u32 = 99_999;
}

/// Repetitions and rest seconds per training goal
pub mod goal_parameters {
    /// `build_muscle`: reps, rest seconds
    pub const BUILD_MUSCLE: (u32, u32) = (10, 60);
    /// `lose_weight`: reps, rest seconds
    pub const LOSE_WEIGHT: (u32, u32) = (15, 30);
    /// `strength`: reps, rest seconds
    pub const STRENGTH: (u32, u32) = (5, 120);
    /// `endurance`: reps, rest seconds
    pub const ENDURANCE: (u32, u32) = (20, 30);
}

/// Fixed user-facing messages
pub mod messages {
    /// Reason attached to the active recovery recommendation
    pub const OVERTRAINING_REASON: &str = "You have recently trained the same muscle groups multiple times. \
         An active recovery session will reduce fatigue and prevent injury.";
}
