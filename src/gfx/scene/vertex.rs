//! # Vertex Data Structures
//!
//! This module defines the vertex format of generated tree meshes. It is
//! GPU-compatible so a renderer can upload the buffer without conversion.

use cgmath::Vector3;

/// A 3D vertex holding only a position.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
///
/// # Examples
///
/// ```rust
/// use yggdrasil::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D::new([0.0, 1.0, 0.0]);
/// assert_eq!(vertex.position, [0.0, 1.0, 0.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
}

impl Vertex3D {
    pub fn new(position: [f32; 3]) -> Self {
        Self { position }
    }

    pub fn position_vec(&self) -> Vector3<f32> {
        Vector3::from(self.position)
    }
}

impl From<Vector3<f32>> for Vertex3D {
    fn from(position: Vector3<f32>) -> Self {
        Self {
            position: position.into(),
        }
    }
}
