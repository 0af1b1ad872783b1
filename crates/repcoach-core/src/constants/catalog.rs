// ABOUTME: Fixed, ordered catalog of recommendable workouts
// ABOUTME: Names double as muscle-group labels so they compare directly with normalized history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use crate::models::{CatalogWorkout, WorkoutType};

/// Workout catalog in recommendation order
pub const WORKOUT_CATALOG: &[CatalogWorkout] = &[
    CatalogWorkout {
        name: "Chest",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Back",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Legs",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Arms",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Core",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Cardio",
        workout_type: WorkoutType::Cardio,
    },
    CatalogWorkout {
        name: "Full Body",
        workout_type: WorkoutType::Strength,
    },
    CatalogWorkout {
        name: "Active Recovery",
        workout_type: WorkoutType::Recovery,
    },
];
