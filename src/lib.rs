// src/lib.rs
//! Yggdrasil
//!
//! Procedural fractal tree meshes: a recursive branch generator over
//! `cgmath`, with optional seeded jitter, producing GPU-ready buffers.

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;
pub mod tree;
pub mod ui;

// Re-export main types for convenience
pub use error::TreeError;
pub use tree::{MeshSink, Tree};

/// Creates a tree with the demo configuration whose meshes are discarded
pub fn default() -> Tree<()> {
    Tree::new(())
}
