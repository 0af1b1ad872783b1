// ABOUTME: Rules engine for RepCoach: normalization, fatigue, leveling, recommendations, weekly plans
// ABOUTME: Also hosts the chat intent classifier and the injectable random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

#![deny(unsafe_code)]

//! # RepCoach Intelligence
//!
//! Every function here is total over its input: empty or malformed histories
//! take the default paths and never produce errors. Randomness comes only from
//! the caller-supplied [`RandomSource`].

/// Injectable randomness for candidate picks and exercise sampling
pub mod random;

/// Exercise name to muscle-group normalization
pub mod normalizer;

/// Overtraining detection
pub mod fatigue;

/// Training level from recent session frequency
pub mod progression;

/// Recommendation explanations
pub mod explanation;

/// Single next-workout recommendation
pub mod recommender;

/// Split table for weekly plans
pub mod splits;

/// Seven-day plan generation
pub mod weekly_plan;

/// Chat intent classification
pub mod intent;

pub use explanation::generate_reason;
pub use fatigue::check_fatigue;
pub use intent::{classify_intent, Intent};
pub use normalizer::normalize_history;
pub use progression::{determine_level, determine_level_at, parse_session_date, SessionDate};
pub use random::{choose, sample_without_replacement, RandomSource};
pub use recommender::{recommend_workout, recommend_workout_at, select_candidates};
pub use weekly_plan::{generate_weekly_plan, generate_weekly_plan_at, goal_parameters, GoalParameters};
