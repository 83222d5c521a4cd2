//! Randomness source for troop counts, mission draws and dice rolls
//!
//! A session owns exactly one source and consumes it sequentially:
//! map initialization first, then the mission draw, then combat dice.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Faces on a combat die
pub const DIE_FACES: u32 = 6;

/// A stream of uniform integers
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Roll one six-sided die
    fn roll_die(&mut self) -> u32 {
        self.next_in_range(1, DIE_FACES)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

/// Deterministic production source backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy, keeping the seed so the session can be replayed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of values
///
/// Each draw pops the next value and clamps it into the requested range.
/// Once the script runs out every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.values
            .pop_front()
            .map(|v| v.clamp(low, high))
            .unwrap_or(low)
    }
}
