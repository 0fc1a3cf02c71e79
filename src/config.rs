//! # Generation Configuration
//!
//! Fixed geometric constants of the tree and the two knobs that change how it
//! is built: how many children each branch splits into, and whether branch
//! lengths and angles are jittered by a seeded random stream.
//!
//! ```rust
//! use yggdrasil::config::{BranchArity, GeneratorConfig, JitterMode};
//!
//! let config = GeneratorConfig::new()
//!     .with_arity(BranchArity::Binary)
//!     .with_jitter(JitterMode::Seeded { seed: 42 });
//! assert_eq!(config.arity, BranchArity::Binary);
//! ```

use cgmath::Vector3;

/// Base position of the root branch.
pub const ROOT_BASE: Vector3<f32> = Vector3 {
    x: 0.0,
    y: -2.0,
    z: 0.0,
};

/// Growth direction of the root branch.
pub const UP_AXIS: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Length of the root branch.
pub const BASE_LENGTH: f32 = 2.0;

/// Length multiplier applied at each depth level.
pub const SHRINK_FACTOR: f32 = 0.66;

/// Half of a branch triangle's base width.
pub const STRIDE_HALF_WIDTH: f32 = 0.02;

/// Reference axis crossed with a branch direction to find its stride.
pub const PERPENDICULAR_REFERENCE: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Used instead of [`PERPENDICULAR_REFERENCE`] when a branch grows along it.
pub const FALLBACK_REFERENCE: Vector3<f32> = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

/// Number of children spawned at every branch split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchArity {
    /// Left/right split only: `2^(L+1) - 1` triangles.
    Binary,
    /// Left/right split plus both children turned a quarter about the up axis:
    /// `(4^(L+1) - 1) / 3` triangles.
    #[default]
    Quaternary,
}

impl BranchArity {
    pub fn children(self) -> u32 {
        match self {
            BranchArity::Binary => 2,
            BranchArity::Quaternary => 4,
        }
    }
}

/// Source of the per-branch length and angle factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterMode {
    /// Every factor is exactly `1.0`.
    Deterministic,
    /// Factors drawn uniformly from `[1, π)` by a generator seeded anew on
    /// every call, so identical inputs give bit-identical meshes.
    Seeded { seed: u64 },
}

impl JitterMode {
    /// The mode the interactive demo runs with.
    pub const DEMO: JitterMode = JitterMode::Seeded { seed: 0 };
}

/// Configuration for a tree generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub arity: BranchArity,
    pub jitter: JitterMode,
}

impl GeneratorConfig {
    /// Create a configuration with the demo defaults (4-way split, seed 0)
    pub fn new() -> Self {
        Self {
            arity: BranchArity::default(),
            jitter: JitterMode::DEMO,
        }
    }

    /// Configuration producing the unjittered tree, useful for exact geometry checks
    pub fn deterministic(arity: BranchArity) -> Self {
        Self {
            arity,
            jitter: JitterMode::Deterministic,
        }
    }

    pub fn with_arity(mut self, arity: BranchArity) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_jitter(mut self, jitter: JitterMode) -> Self {
        self.jitter = jitter;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
