// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entropy abstraction for the simulators' random increments
//!
//! Both simulators draw their per-tick increments through this trait so a
//! run can be replayed from a seed, and tests can script exact sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// A source of uniform random draws
pub trait Entropy: Send + Sync {
    /// Uniform integer draw from the inclusive range [lo, hi]
    fn draw_u32(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform float draw from the half-open range [lo, hi)
    fn draw_f64(&mut self, lo: f64, hi: f64) -> f64;
}

/// Seedable production source backed by ChaCha8
#[derive(Clone)]
pub struct ChaChaEntropy {
    rng: ChaCha8Rng,
}

impl ChaChaEntropy {
    /// Replayable source: the same seed yields the same tick sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// OS-seeded source for ordinary runs
    pub fn from_os() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Entropy for ChaChaEntropy {
    fn draw_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    fn draw_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}

/// Scripted source for tests: pops queued draws, clamped into the
/// requested range; an exhausted queue keeps returning the range minimum.
#[derive(Clone, Default)]
pub struct ScriptedEntropy {
    ints: VecDeque<u32>,
    floats: VecDeque<f64>,
}

impl ScriptedEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer draws
    pub fn with_ints(mut self, draws: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(draws);
        self
    }

    /// Queue float draws
    pub fn with_floats(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(draws);
        self
    }
}

impl Entropy for ScriptedEntropy {
    fn draw_u32(&mut self, lo: u32, hi: u32) -> u32 {
        self.ints
            .pop_front()
            .map_or(lo, |v| v.clamp(lo, hi))
    }

    fn draw_f64(&mut self, lo: f64, hi: f64) -> f64 {
        self.floats
            .pop_front()
            .map_or(lo, |v| v.clamp(lo, hi))
    }
}

#[cfg(test)]
#[path = "entropy_tests.rs"]
mod tests;
