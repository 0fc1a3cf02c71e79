//! Axis-aligned bounding boxes for generated meshes.

use cgmath::Vector3;

use crate::gfx::scene::vertex::Vertex3D;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create an AABB enclosing a set of vertices, `None` if there are none
    pub fn from_vertices(vertices: &[Vertex3D]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;

        let mut min = first.position_vec();
        let mut max = min;

        for vertex in rest {
            let v = vertex.position_vec();
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Some(Self::new(min, max))
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }
}
