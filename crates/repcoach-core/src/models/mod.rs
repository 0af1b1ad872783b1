// ABOUTME: Core data models for workout history, recommendations, and weekly plans
// ABOUTME: Re-exports the request and response shapes shared by the engine and the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! # Data Models
//!
//! Inputs (`HistoryEntry`, `Preferences`) are request-scoped and never mutated.
//! Outputs (`Recommendation`, `WeeklyPlan`) are plain values built per request.

mod history;
mod plan;
mod workout;

pub use history::{HistoryEntry, NormalizedEntry};
pub use plan::{
    DayFocus, DayOfWeek, DaySchedule, ExercisePrescription, Goal, Preferences, WeeklyPlan,
    WeeklySchedule,
};
pub use workout::{CatalogWorkout, Intensity, Level, MuscleGroup, Recommendation, WorkoutType};
