//! Ray-primitive intersection algorithms.
//!
//! Each primitive has a dedicated intersector that computes the nearest
//! hit parameter inside the ray's valid interval, plus a variant that
//! also derives the local surface geometry at the hit point.

mod sphere;
mod triangle;

pub use sphere::{intersect_sphere, intersect_sphere_geo};
pub use triangle::{intersect_triangle, intersect_triangle_geo};
