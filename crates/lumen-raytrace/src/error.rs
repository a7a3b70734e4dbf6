//! Error types for primitive construction.

use thiserror::Error;

/// Errors from the validating shape constructors.
///
/// Intersection itself has no error taxonomy: a miss is simply `None`.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Sphere radius must be strictly positive.
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Triangle vertices are collinear or coincident.
    #[error("triangle is degenerate (zero area)")]
    DegenerateTriangle,
}
