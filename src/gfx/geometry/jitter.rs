//! # Branch Jitter Sources
//!
//! The generator asks a [`BranchJitter`] for one factor per scaled quantity:
//! first the tip distance of every branch, then the split angle of every
//! branch that has children. Factors fall in `[1, π)`.

use std::f32::consts::PI;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::JitterMode;

/// A stream of per-branch scale factors
pub trait BranchJitter {
    /// Next factor in the stream
    fn next_factor(&mut self) -> f32;
}

impl<J: BranchJitter + ?Sized> BranchJitter for &mut J {
    fn next_factor(&mut self) -> f32 {
        (**self).next_factor()
    }
}

/// Always `1.0`: branches keep their nominal length and angle
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl BranchJitter for NoJitter {
    fn next_factor(&mut self) -> f32 {
        1.0
    }
}

/// Reproducible factors drawn uniformly from `[1, π)`
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BranchJitter for SeededJitter {
    fn next_factor(&mut self) -> f32 {
        self.rng.random_range(1.0..PI)
    }
}

/// Replays a fixed list of factors, wrapping around at the end.
///
/// An empty list behaves like [`NoJitter`].
#[derive(Debug, Clone, Default)]
pub struct SequenceJitter {
    factors: Vec<f32>,
    cursor: usize,
}

impl SequenceJitter {
    pub fn new(factors: impl Into<Vec<f32>>) -> Self {
        Self {
            factors: factors.into(),
            cursor: 0,
        }
    }

    /// Number of factors handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl BranchJitter for SequenceJitter {
    fn next_factor(&mut self) -> f32 {
        if self.factors.is_empty() {
            self.cursor += 1;
            return 1.0;
        }
        let factor = self.factors[self.cursor % self.factors.len()];
        self.cursor += 1;
        factor
    }
}

/// Jitter source selected by a [`JitterMode`], freshly seeded
pub enum ModeJitter {
    Deterministic(NoJitter),
    Seeded(SeededJitter),
}

impl From<JitterMode> for ModeJitter {
    fn from(mode: JitterMode) -> Self {
        match mode {
            JitterMode::Deterministic => ModeJitter::Deterministic(NoJitter),
            JitterMode::Seeded { seed } => ModeJitter::Seeded(SeededJitter::new(seed)),
        }
    }
}

impl BranchJitter for ModeJitter {
    fn next_factor(&mut self) -> f32 {
        match self {
            ModeJitter::Deterministic(jitter) => jitter.next_factor(),
            ModeJitter::Seeded(jitter) => jitter.next_factor(),
        }
    }
}
