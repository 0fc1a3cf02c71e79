//! # Fractal Branch Generation
//!
//! Builds a tree as one thin triangle per branch. Starting from the root, each
//! branch emits its triangle and, until the requested depth is reached, splits
//! into tilted children that grow from its tip with a shorter length.
//!
//! ```text
//!        tip
//!         ^
//!        / \
//!       /_x_\
//!       ^^
//!    stride
//! ```
//!
//! A binary tree of depth `L` holds `2^(L+1) - 1` triangles and a quaternary
//! one `(4^(L+1) - 1) / 3`. Recursion depth equals `L`, not the branch count.

use cgmath::{InnerSpace, Rad, Vector3};
use log::{debug, trace};

use super::jitter::{BranchJitter, ModeJitter};
use super::MeshBuffer;
use crate::config::{
    BranchArity, GeneratorConfig, BASE_LENGTH, ROOT_BASE, SHRINK_FACTOR, STRIDE_HALF_WIDTH,
    UP_AXIS,
};
use crate::error::{Result, TreeError};
use crate::gfx::math::{self, Rotation};
use crate::gfx::scene::vertex::Vertex3D;

/// Validated inputs of a generation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchParams {
    level: u32,
    angle: Rad<f32>,
}

impl BranchParams {
    /// Validate a recursion depth and a branching angle.
    ///
    /// Accepts any angle type convertible to radians, e.g. `cgmath::Deg(20.0)`.
    pub fn new<A: Into<Rad<f32>>>(level: i64, angle: A) -> Result<Self> {
        if level < 0 {
            return Err(TreeError::NegativeBranchLevel(level));
        }
        let level = u32::try_from(level).map_err(|_| TreeError::BranchLevelOutOfRange(level))?;

        let angle = angle.into();
        if !angle.0.is_finite() {
            return Err(TreeError::NonFiniteAngle(angle.0));
        }

        Ok(Self { level, angle })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn angle(&self) -> Rad<f32> {
        self.angle
    }
}

/// Number of triangles a tree of depth `level` emits, `None` on overflow
pub fn triangle_count(level: u32, arity: BranchArity) -> Option<u128> {
    let children = u128::from(arity.children());
    let mut layer: u128 = 1;
    let mut total: u128 = 1;
    for _ in 0..level {
        layer = layer.checked_mul(children)?;
        total = total.checked_add(layer)?;
    }
    Some(total)
}

/// Size in bytes of the vertex and index buffers of a tree of depth `level`,
/// `None` on overflow
pub fn mesh_bytes(level: u32, arity: BranchArity) -> Option<u128> {
    let per_triangle = 3 * (std::mem::size_of::<Vertex3D>() + std::mem::size_of::<u32>());
    triangle_count(level, arity)?.checked_mul(per_triangle as u128)
}

/// Generate a tree mesh using the jitter source selected by `config`.
///
/// The jitter stream is seeded anew on every call, so identical inputs always
/// produce bit-identical buffers.
pub fn generate_branches(params: &BranchParams, config: &GeneratorConfig) -> Result<MeshBuffer> {
    generate_with_jitter(params, config.arity, ModeJitter::from(config.jitter))
}

/// Generate a tree mesh drawing length and angle factors from `jitter`.
///
/// Per branch, one factor scales the tip distance; branches with children draw
/// a second factor scaling the split angle.
pub fn generate_with_jitter<J: BranchJitter>(
    params: &BranchParams,
    arity: BranchArity,
    jitter: J,
) -> Result<MeshBuffer> {
    let triangles = reserved_triangles(params.level, arity)?;
    debug!(
        "Generating {:?} tree: level {}, angle {:.3} rad, {} triangles",
        arity, params.level, params.angle.0, triangles
    );

    let mut builder = BranchBuilder {
        mesh: MeshBuffer::with_triangle_capacity(triangles),
        angle: params.angle,
        arity,
        jitter,
        quarter_turn: Rotation::from_axis_angle(UP_AXIS, Rad(std::f32::consts::FRAC_PI_2)),
        fallbacks: 0,
    };
    builder.grow(ROOT_BASE, UP_AXIS, BASE_LENGTH, params.level);

    if builder.fallbacks > 0 {
        debug!(
            "{} branches grew along the reference axis and used the fallback stride",
            builder.fallbacks
        );
    }
    Ok(builder.mesh)
}

fn reserved_triangles(level: u32, arity: BranchArity) -> Result<usize> {
    let too_large = |triangles: u128| TreeError::MeshTooLarge { level, triangles };

    let triangles = triangle_count(level, arity).ok_or(too_large(u128::MAX))?;
    // Largest index emitted is 3 * triangles - 1
    let index_limit = u128::from(u32::MAX) + 1;
    if triangles.checked_mul(3).map_or(true, |indices| indices > index_limit) {
        return Err(too_large(triangles));
    }
    usize::try_from(triangles).map_err(|_| too_large(triangles))
}

struct BranchBuilder<J> {
    mesh: MeshBuffer,
    angle: Rad<f32>,
    arity: BranchArity,
    jitter: J,
    quarter_turn: Rotation,
    fallbacks: usize,
}

impl<J: BranchJitter> BranchBuilder<J> {
    fn grow(&mut self, base: Vector3<f32>, direction: Vector3<f32>, length: f32, level: u32) {
        let (perp, fell_back) = math::perpendicular(direction);
        if fell_back {
            trace!("Branch at {:?} grows along the reference axis", base);
            self.fallbacks += 1;
        }

        let stride = perp * STRIDE_HALF_WIDTH;
        let tip = base + direction * (length * self.jitter.next_factor());
        self.mesh.push_triangle(base + stride, base - stride, tip);

        if level == 0 {
            return;
        }

        // Jittered angles may exceed f32 range for huge inputs
        let split_angle =
            math::wrap_angle(f64::from(self.angle.0) * f64::from(self.jitter.next_factor()));
        let split = Rotation::from_axis_angle(direction.cross(perp), split_angle);
        let first = split.inverse().apply(direction).normalize();
        let second = split.apply(direction).normalize();

        let next_length = length * SHRINK_FACTOR;
        let next_level = level - 1;

        self.grow(tip, first, next_length, next_level);
        self.grow(tip, second, next_length, next_level);

        if self.arity == BranchArity::Quaternary {
            let turned_first = self.quarter_turn.apply(first).normalize();
            let turned_second = self.quarter_turn.apply(second).normalize();
            self.grow(tip, turned_first, next_length, next_level);
            self.grow(tip, turned_second, next_length, next_level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JitterMode;
    use crate::gfx::geometry::jitter::{NoJitter, SequenceJitter};
    use cgmath::Deg;

    fn deterministic(level: i64, degrees: f32, arity: BranchArity) -> MeshBuffer {
        let params = BranchParams::new(level, Deg(degrees)).unwrap();
        generate_branches(&params, &GeneratorConfig::deterministic(arity)).unwrap()
    }

    /// Distance from the midpoint of a triangle's base to its tip
    fn branch_length(mesh: &MeshBuffer, triangle: usize) -> f32 {
        let [a, b, tip] = mesh.triangle_positions(triangle).unwrap();
        (tip - (a + b) * 0.5).magnitude()
    }

    #[test]
    fn test_level_zero_is_single_triangle() {
        for degrees in [0.0, 5.0, 20.0, 45.0, 90.0, 400.0] {
            for arity in [BranchArity::Binary, BranchArity::Quaternary] {
                let mesh = deterministic(0, degrees, arity);
                assert_eq!(mesh.triangle_count(), 1);
                assert_eq!(mesh.vertex_count(), 3);
                assert_eq!(mesh.indices, vec![0, 1, 2]);
            }
        }
    }

    #[test]
    fn test_quaternary_recurrence() {
        let mut expected = 1;
        for level in 0..=3 {
            let mesh = deterministic(level, 20.0, BranchArity::Quaternary);
            assert_eq!(mesh.triangle_count(), expected, "level {level}");
            assert_eq!(mesh.vertex_count(), 3 * expected);
            assert_eq!(mesh.indices.len(), 3 * expected);
            assert_eq!(expected, (4usize.pow(level as u32 + 1) - 1) / 3);
            expected = 1 + 4 * expected;
        }
    }

    #[test]
    fn test_binary_counts() {
        for level in 0..=5u32 {
            let mesh = deterministic(level.into(), 20.0, BranchArity::Binary);
            assert_eq!(mesh.triangle_count(), 2usize.pow(level + 1) - 1);
        }
    }

    #[test]
    fn test_triangle_count_formula() {
        assert_eq!(triangle_count(0, BranchArity::Quaternary), Some(1));
        assert_eq!(triangle_count(3, BranchArity::Quaternary), Some(85));
        assert_eq!(triangle_count(2, BranchArity::Binary), Some(7));
        assert_eq!(triangle_count(10, BranchArity::Binary), Some(2047));
        assert_eq!(triangle_count(200, BranchArity::Quaternary), None);
    }

    #[test]
    fn test_mesh_bytes_matches_generated_buffers() {
        let mesh = deterministic(3, 20.0, BranchArity::Quaternary);
        let actual = mesh.vertex_bytes().len() + mesh.index_bytes().len();
        assert_eq!(mesh_bytes(3, BranchArity::Quaternary), Some(actual as u128));
        assert_eq!(mesh_bytes(200, BranchArity::Quaternary), None);
    }

    #[test]
    fn test_binary_level_two_scenario() {
        let mesh = deterministic(2, 20.0, BranchArity::Binary);
        assert_eq!(mesh.triangle_count(), 7);

        let [_, _, tip] = mesh.triangle_positions(0).unwrap();
        assert_eq!(tip, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_indices_reference_consecutive_vertices() {
        let mesh = deterministic(3, 30.0, BranchArity::Quaternary);
        for (i, tri) in mesh.triangles().enumerate() {
            let first = 3 * i as u32;
            assert_eq!(tri, [first, first + 1, first + 2]);
            assert!(tri.iter().all(|&index| (index as usize) < mesh.vertex_count()));
        }
    }

    #[test]
    fn test_root_base_is_symmetric() {
        for degrees in [5.0, 20.0, 77.0] {
            let mesh = deterministic(0, degrees, BranchArity::Quaternary);
            let [a, b, _] = mesh.triangle_positions(0).unwrap();
            assert_eq!((a + b) * 0.5, ROOT_BASE);
            // base + stride comes first
            assert_eq!(a, ROOT_BASE + Vector3::new(STRIDE_HALF_WIDTH, 0.0, 0.0));
            assert_eq!(b, ROOT_BASE - Vector3::new(STRIDE_HALF_WIDTH, 0.0, 0.0));
        }
    }

    #[test]
    fn test_branch_length_shrinks_per_depth() {
        for arity in [BranchArity::Binary, BranchArity::Quaternary] {
            let mesh = deterministic(2, 20.0, arity);
            // Depth-first order: root, its first child, that child's first child
            for depth in 0..3 {
                let expected = BASE_LENGTH * SHRINK_FACTOR.powi(depth as i32);
                let actual = branch_length(&mesh, depth);
                assert!(
                    (actual - expected).abs() < 1e-5,
                    "depth {depth}: {actual} != {expected}"
                );
            }
        }
    }

    #[test]
    fn test_children_tilt_by_branch_angle() {
        let mesh = deterministic(1, 20.0, BranchArity::Quaternary);
        let [_, _, root_tip] = mesh.triangle_positions(0).unwrap();
        let expected = Deg(20.0f32).0.to_radians().cos();

        for child in 1..5 {
            let [a, b, tip] = mesh.triangle_positions(child).unwrap();
            assert_eq!((a + b) * 0.5, root_tip);
            let direction = (tip - root_tip).normalize();
            assert!((direction.dot(UP_AXIS) - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let params = BranchParams::new(4, Deg(25.0)).unwrap();
        for config in [
            GeneratorConfig::new(),
            GeneratorConfig::deterministic(BranchArity::Binary),
            GeneratorConfig::new().with_jitter(JitterMode::Seeded { seed: 99 }),
        ] {
            let first = generate_branches(&params, &config).unwrap();
            let second = generate_branches(&params, &config).unwrap();
            assert_eq!(first.indices, second.indices);
            assert_eq!(first.vertex_bytes(), second.vertex_bytes());
        }
    }

    #[test]
    fn test_seed_changes_shape() {
        let params = BranchParams::new(3, Deg(20.0)).unwrap();
        let a = generate_branches(&params, &GeneratorConfig::new()).unwrap();
        let b = generate_branches(
            &params,
            &GeneratorConfig::new().with_jitter(JitterMode::Seeded { seed: 1 }),
        )
        .unwrap();
        assert_eq!(a.triangle_count(), b.triangle_count());
        assert_ne!(a.vertices, b.vertices);
    }

    #[test]
    fn test_injected_jitter_scales_length_and_angle() {
        let params = BranchParams::new(1, Deg(20.0)).unwrap();
        let mut jitter = SequenceJitter::new(vec![1.5]);
        let mesh = generate_with_jitter(&params, BranchArity::Binary, &mut jitter).unwrap();

        // Root: tip factor and angle factor; each child: tip factor
        assert_eq!(jitter.draws(), 4);

        let [_, _, root_tip] = mesh.triangle_positions(0).unwrap();
        assert!((root_tip - Vector3::new(0.0, 1.0, 0.0)).magnitude() < 1e-6);

        let expected_cos = 30.0f32.to_radians().cos();
        for child in 1..3 {
            let [_, _, tip] = mesh.triangle_positions(child).unwrap();
            let offset = tip - root_tip;
            assert!((offset.magnitude() - BASE_LENGTH * SHRINK_FACTOR * 1.5).abs() < 1e-5);
            assert!((offset.normalize().dot(UP_AXIS) - expected_cos).abs() < 1e-5);
        }
    }

    #[test]
    fn test_no_jitter_matches_deterministic_mode() {
        let params = BranchParams::new(3, Deg(15.0)).unwrap();
        let injected = generate_with_jitter(&params, BranchArity::Quaternary, NoJitter).unwrap();
        let configured =
            generate_branches(&params, &GeneratorConfig::deterministic(BranchArity::Quaternary))
                .unwrap();
        assert_eq!(injected, configured);
    }

    #[test]
    fn test_right_angle_split_stays_finite() {
        // Quarter-turned children of a 90 degree split grow along Z
        let mesh = deterministic(3, 90.0, BranchArity::Quaternary);
        assert!(mesh
            .vertices
            .iter()
            .all(|v| math::is_finite(v.position_vec())));
    }

    #[test]
    fn test_huge_finite_angle_stays_finite() {
        let params = BranchParams::new(2, Rad(3.0e38)).unwrap();
        for config in [
            GeneratorConfig::new(),
            GeneratorConfig::deterministic(BranchArity::Quaternary),
            GeneratorConfig::deterministic(BranchArity::Binary),
        ] {
            let mesh = generate_branches(&params, &config).unwrap();
            let non_finite = mesh
                .vertices
                .iter()
                .filter(|v| !math::is_finite(v.position_vec()))
                .count();
            assert_eq!(non_finite, 0, "{config:?}");
        }
    }

    #[test]
    fn test_extent_is_bounded() {
        // Lengths sum to at most BASE_LENGTH / (1 - SHRINK_FACTOR) from the root
        let reach = BASE_LENGTH / (1.0 - SHRINK_FACTOR) + STRIDE_HALF_WIDTH;
        let mesh = deterministic(6, 30.0, BranchArity::Quaternary);
        let bounds = mesh.bounds().unwrap();
        for corner in [bounds.min, bounds.max] {
            assert!((corner - ROOT_BASE).magnitude() <= reach * 3f32.sqrt());
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert_eq!(
            BranchParams::new(-1, Deg(20.0)),
            Err(TreeError::NegativeBranchLevel(-1))
        );
        assert!(matches!(
            BranchParams::new(1, Rad(f32::NAN)),
            Err(TreeError::NonFiniteAngle(_))
        ));
        assert!(matches!(
            BranchParams::new(1, Deg(f32::INFINITY)),
            Err(TreeError::NonFiniteAngle(_))
        ));
        assert_eq!(
            BranchParams::new(i64::from(u32::MAX) + 1, Deg(20.0)),
            Err(TreeError::BranchLevelOutOfRange(i64::from(u32::MAX) + 1))
        );
    }

    #[test]
    fn test_oversized_mesh_rejected() {
        let params = BranchParams::new(16, Deg(20.0)).unwrap();
        assert!(matches!(
            generate_branches(&params, &GeneratorConfig::new()),
            Err(TreeError::MeshTooLarge { level: 16, .. })
        ));
    }
}
