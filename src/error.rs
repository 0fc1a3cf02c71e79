//! Errors produced while validating parameters and generating tree meshes.

/// Errors produced by the branch generator.
///
/// Every variant is raised before any buffer is touched, so a failed call
/// never leaves a partially built mesh behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("branch level must be non-negative, got {0}")]
    NegativeBranchLevel(i64),

    #[error("branch level {0} does not fit the generator's depth range")]
    BranchLevelOutOfRange(i64),

    #[error("branch angle must be finite, got {0} rad")]
    NonFiniteAngle(f32),

    #[error("branch level {level} would emit {triangles} triangles, exceeding the u32 index range")]
    MeshTooLarge { level: u32, triangles: u128 },
}

pub type Result<T> = std::result::Result<T, TreeError>;
