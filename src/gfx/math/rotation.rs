//! Orientation value type used to tilt branch directions.

use cgmath::{InnerSpace, Quaternion, Rad, Rotation3, Vector3};

/// A rotation in 3D space.
///
/// Backed by a unit quaternion, but only exposes what the generator needs:
/// construction from an axis and angle, application to a vector and
/// inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    quat: Quaternion<f32>,
}

impl Rotation {
    /// Rotation by `angle` about `axis` (right-handed). The axis does not need
    /// to be normalized.
    pub fn from_axis_angle<A: Into<Rad<f32>>>(axis: Vector3<f32>, angle: A) -> Self {
        Self {
            quat: Quaternion::from_axis_angle(axis.normalize(), angle),
        }
    }

    pub fn identity() -> Self {
        Self {
            quat: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Rotate `v` by this rotation
    pub fn apply(&self, v: Vector3<f32>) -> Vector3<f32> {
        self.quat * v
    }

    /// The opposite rotation
    pub fn inverse(&self) -> Self {
        Self {
            quat: self.quat.conjugate(),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}
