// ABOUTME: Injectable random source for candidate picks, exercise sampling, and exercise ids
// ABOUTME: Any rand::Rng works, so production uses thread_rng and tests use seeded generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use rand::Rng;
use repcoach_core::constants::plan_defaults::{EXERCISE_ID_MAX, EXERCISE_ID_MIN};

/// Source of the engine's only nondeterminism
pub trait RandomSource {
    /// Uniform index in `0..len`; returns 0 when `len` is 0 or 1
    fn pick_index(&mut self, len: usize) -> usize;

    /// Request-scoped five digit exercise id
    fn exercise_id(&mut self) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.gen_range(0..len)
        }
    }

    fn exercise_id(&mut self) -> u32 {
        self.gen_range(EXERCISE_ID_MIN..=EXERCISE_ID_MAX)
    }
}

/// Pick one item uniformly, `None` for an empty slice
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}

/// Draw `min(count, pool.len())` distinct items (partial Fisher-Yates)
pub fn sample_without_replacement<T: Copy, R: RandomSource + ?Sized>(
    rng: &mut R,
    pool: &[T],
    count: usize,
) -> Vec<T> {
    let mut items = pool.to_vec();
    let take = count.min(items.len());
    for i in 0..take {
        let j = i + rng.pick_index(items.len() - i);
        items.swap(i, j);
    }
    items.truncate(take);
    items
}
