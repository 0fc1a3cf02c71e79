//! # Graphics Module
//!
//! Geometry side of the engine: the math the branch generator runs on, the
//! vertex format, and the generated mesh buffers.
//!
//! - **Math** ([`math`]) - Rotations and perpendicular helpers over cgmath
//! - **Geometry** ([`geometry`]) - Mesh buffers, bounds and branch generation
//! - **Scene** ([`scene`]) - GPU-compatible vertex layout

pub mod geometry;
pub mod math;
pub mod scene;

// Re-export commonly used types
pub use geometry::MeshBuffer;
pub use scene::Vertex3D;
