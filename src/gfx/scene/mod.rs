//! # Scene Data
//!
//! Vertex data structures shared between the generator and a renderer.

pub mod vertex;

pub use vertex::Vertex3D;
