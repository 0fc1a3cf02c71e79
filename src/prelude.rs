//! # Yggdrasil Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use yggdrasil::prelude::*;
//!
//! let mut tree = Tree::with_config(LogSink::new(), GeneratorConfig::deterministic(BranchArity::Binary));
//! tree.generate(2, Deg(20.0)).unwrap();
//! assert_eq!(tree.mesh().triangle_count(), 7);
//! ```

// Re-export tree and configuration types
pub use crate::config::{BranchArity, GeneratorConfig, JitterMode};
pub use crate::error::TreeError;
pub use crate::tree::{LogSink, MeshSink, Tree};

// Re-export geometry types
pub use crate::gfx::geometry::{
    generate_branches, generate_with_jitter, mesh_bytes, Aabb, BranchJitter, BranchParams, MeshBuffer,
    NoJitter, SeededJitter, SequenceJitter,
};
pub use crate::gfx::math::Rotation;
pub use crate::gfx::scene::Vertex3D;

// Re-export UI controls
pub use crate::ui::{Slider, TreeControls};

// Angle types accepted by the generator
pub use cgmath::{Deg, Rad};
