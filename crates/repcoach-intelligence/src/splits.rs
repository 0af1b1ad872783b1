// ABOUTME: Data-driven weekly split table mapping day focus to muscle-group draw counts
// ABOUTME: Chooses the Monday..Sunday focus rotation for a requested number of training days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Weekly splits
//!
//! | Target days | Mon  | Tue  | Wed  | Thu  | Fri  | Sat   | Sun  |
//! |-------------|------|------|------|------|------|-------|------|
//! | <= 3        | Full | Rest | Full | Rest | Full | Rest  | Rest |
//! | 4           | UB   | LB   | Rest | UB   | LB   | Rest  | Rest |
//! | 5           | Push | Pull | Legs | Rest | Upper| Lower | Rest |
//! | >= 6        | Push | Pull | Legs | Push | Pull | Legs  | Rest |

use repcoach_core::models::{DayFocus, MuscleGroup};

use DayFocus::{FullBody, Legs, Lower, LowerBody, Pull, Push, Rest, Upper, UpperBody};

/// One muscle-group draw: how many distinct exercises to sample from a group
pub type Draw = (MuscleGroup, usize);

const FULL_BODY: &[Draw] = &[
    (MuscleGroup::Chest, 1),
    (MuscleGroup::Back, 1),
    (MuscleGroup::Legs, 1),
    (MuscleGroup::Shoulders, 1),
    (MuscleGroup::Core, 1),
];

const UPPER: &[Draw] = &[
    (MuscleGroup::Chest, 2),
    (MuscleGroup::Back, 2),
    (MuscleGroup::Shoulders, 1),
    (MuscleGroup::Arms, 1),
];

const LOWER: &[Draw] = &[(MuscleGroup::Legs, 3), (MuscleGroup::Core, 2)];

const PUSH: &[Draw] = &[
    (MuscleGroup::Chest, 2),
    (MuscleGroup::Shoulders, 1),
    (MuscleGroup::Arms, 1),
];

const PULL: &[Draw] = &[(MuscleGroup::Back, 3), (MuscleGroup::Arms, 1)];

const LEGS: &[Draw] = &[(MuscleGroup::Legs, 3), (MuscleGroup::Core, 1)];

const THREE_DAY: [DayFocus; 7] = [FullBody, Rest, FullBody, Rest, FullBody, Rest, Rest];
const FOUR_DAY: [DayFocus; 7] = [UpperBody, LowerBody, Rest, UpperBody, LowerBody, Rest, Rest];
const FIVE_DAY: [DayFocus; 7] = [Push, Pull, Legs, Rest, Upper, Lower, Rest];
const SIX_DAY: [DayFocus; 7] = [Push, Pull, Legs, Push, Pull, Legs, Rest];

/// Muscle-group draws for a day focus, empty for rest days
#[must_use]
pub const fn draws_for(focus: DayFocus) -> &'static [Draw] {
    match focus {
        FullBody => FULL_BODY,
        UpperBody | Upper => UPPER,
        LowerBody | Lower => LOWER,
        Push => PUSH,
        Pull => PULL,
        Legs => LEGS,
        Rest => &[],
    }
}

/// Monday..Sunday focus rotation for a requested number of training days
#[must_use]
pub const fn week_for(target_days: u32) -> [DayFocus; 7] {
    match target_days {
        0..=3 => THREE_DAY,
        4 => FOUR_DAY,
        5 => FIVE_DAY,
        _ => SIX_DAY,
    }
}

/// Number of training days the split for `target_days` actually schedules
#[must_use]
pub fn active_day_count(target_days: u32) -> usize {
    week_for(target_days)
        .iter()
        .filter(|focus| !focus.is_rest())
        .count()
}

/// Split label for the requested number of days
#[must_use]
pub fn split_label(target_days: u32) -> String {
    format!("{target_days}-Day Split")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(focus: DayFocus) -> usize {
        draws_for(focus).iter().map(|(_, count)| count).sum()
    }

    #[test]
    fn test_active_day_counts() {
        assert_eq!(active_day_count(1), 3);
        assert_eq!(active_day_count(3), 3);
        assert_eq!(active_day_count(4), 4);
        assert_eq!(active_day_count(5), 5);
        assert_eq!(active_day_count(6), 6);
        assert_eq!(active_day_count(7), 6);
    }

    #[test]
    fn test_sunday_always_rests() {
        for days in 0..=10 {
            assert_eq!(week_for(days)[6], Rest);
        }
    }

    #[test]
    fn test_draw_totals() {
        assert_eq!(total(FullBody), 5);
        assert_eq!(total(UpperBody), 6);
        assert_eq!(total(Upper), 6);
        assert_eq!(total(LowerBody), 5);
        assert_eq!(total(Push), 4);
        assert_eq!(total(Pull), 4);
        assert_eq!(total(Legs), 4);
        assert_eq!(total(Rest), 0);
    }

    #[test]
    fn test_split_label_uses_requested_days() {
        assert_eq!(split_label(7), "7-Day Split");
        assert_eq!(split_label(3), "3-Day Split");
    }
}
