//! # Procedural Tree Geometry
//!
//! This module generates fractal tree meshes procedurally and holds the
//! buffers a renderer uploads to the GPU.
//!
//! ## Contents
//!
//! - [`MeshBuffer`]: ordered vertices plus triangle indices
//! - [`Aabb`]: axis-aligned extent of a mesh
//! - [`branches`]: the recursive branch generator
//! - [`jitter`]: sources of the per-branch length and angle factors
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Deg;
//! use yggdrasil::config::{BranchArity, GeneratorConfig};
//! use yggdrasil::gfx::geometry::{generate_branches, BranchParams};
//!
//! let params = BranchParams::new(2, Deg(20.0)).unwrap();
//! let mesh = generate_branches(&params, &GeneratorConfig::deterministic(BranchArity::Binary)).unwrap();
//! assert_eq!(mesh.triangle_count(), 7);
//! ```

pub mod bounds;
pub mod branches;
pub mod jitter;

pub use bounds::Aabb;
pub use branches::{
    generate_branches, generate_with_jitter, mesh_bytes, triangle_count, BranchParams,
};
pub use jitter::{BranchJitter, NoJitter, SeededJitter, SequenceJitter};

use cgmath::Vector3;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated geometry ready for GPU upload.
///
/// Vertices are appended three at a time together with the index triple
/// referencing them, so `indices[3k..3k + 3] == [3k, 3k + 1, 3k + 2]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions in emission order
    pub vertices: Vec<Vertex3D>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create a new empty mesh buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh buffer with room for `triangles` triangles
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Append one triangle and the index triple referencing it
    pub fn push_triangle(&mut self, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) {
        let first = self.vertices.len() as u32;
        self.vertices
            .extend_from_slice(&[Vertex3D::from(a), Vertex3D::from(b), Vertex3D::from(c)]);
        self.indices
            .extend_from_slice(&[first, first + 1, first + 2]);
    }

    /// Iterate over the index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Positions of the `index`-th triangle's corners, in winding order
    pub fn triangle_positions(&self, index: usize) -> Option<[Vector3<f32>; 3]> {
        let start = index.checked_mul(3)?;
        let tri = self.indices.get(start..start.checked_add(3)?)?;
        let corner = |i: u32| self.vertices.get(i as usize).map(Vertex3D::position_vec);
        Some([corner(tri[0])?, corner(tri[1])?, corner(tri[2])?])
    }

    /// Extent of all vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_vertices(&self.vertices)
    }

    /// Raw vertex bytes for a GPU vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for a GPU index buffer (`u32` indices)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
