//! # Branch Math
//!
//! Small helpers over `cgmath` used by the branch generator: an opaque
//! [`Rotation`] value type and the stride/perpendicular computation with its
//! degenerate-axis fallback.

pub mod rotation;

pub use rotation::Rotation;

use std::f64::consts::TAU;

use cgmath::{InnerSpace, Rad, Vector3};

use crate::config::{FALLBACK_REFERENCE, PERPENDICULAR_REFERENCE};

/// Squared length under which a cross product is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Unit vector perpendicular to `direction`.
///
/// Computed as `direction x Z`. When `direction` is parallel to Z the cross
/// product vanishes, so `direction x X` is used instead. The returned flag is
/// `true` when the fallback axis was taken.
pub fn perpendicular(direction: Vector3<f32>) -> (Vector3<f32>, bool) {
    let primary = direction.cross(PERPENDICULAR_REFERENCE);
    if primary.magnitude2() > DEGENERATE_EPSILON {
        return (primary.normalize(), false);
    }

    (direction.cross(FALLBACK_REFERENCE).normalize(), true)
}

/// Narrow an angle in radians to `f32`, reducing it modulo a full turn when
/// it lies outside `[-τ, τ]`.
///
/// Angles within one turn keep their exact value. Larger ones describe the
/// same rotation but would overflow or lose all precision in `f32`.
pub fn wrap_angle(radians: f64) -> Rad<f32> {
    if radians.abs() <= TAU {
        Rad(radians as f32)
    } else {
        Rad(radians.rem_euclid(TAU) as f32)
    }
}

/// Every component is a finite number
pub fn is_finite(v: Vector3<f32>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
