/// Error type shared by the geometry, rotation and animation modules
use thiserror::Error;

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Rotation axis has zero length or non-finite components.
    #[error("invalid rotation axis ({x}, {y}, {z}): axis must be finite and non-zero")]
    InvalidAxis { x: f64, y: f64, z: f64 },

    /// Centroid requested for an empty set of vertices.
    #[error("cannot compute the centroid of an empty vertex set")]
    EmptyVertexSet,

    /// Animation parameters out of range.
    #[error("invalid animation config: {0}")]
    InvalidConfig(String),
}
