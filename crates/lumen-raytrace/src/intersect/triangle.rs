//! Ray-triangle intersection (Möller-Trumbore).

use lumen_math::PARALLEL_EPSILON;

use crate::ray::{LocalGeo, Ray, RayHit};
use crate::shape::Triangle;

/// Intersect a ray with a triangle.
///
/// Möller-Trumbore over the precomputed edge vectors: solves for the
/// barycentric coordinates `(u, v)` and the ray parameter `t` in one
/// pass, rejecting hits outside the triangle or outside the ray's
/// `[t_min, t_max]` interval. A ray parallel to the triangle's plane
/// (`|det| < PARALLEL_EPSILON`) is always a miss.
pub fn intersect_triangle(ray: &Ray, tri: &Triangle) -> Option<f64> {
    let d = ray.direction.as_ref();

    let p_vec = d.cross(&tri.edge_two);
    let det = p_vec.dot(&tri.edge_one);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let t_vec = ray.origin - tri.vertex;
    let u = t_vec.dot(&p_vec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q_vec = t_vec.cross(&tri.edge_one);
    let v = d.dot(&q_vec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = tri.edge_two.dot(&q_vec) * inv_det;
    if !ray.contains(t) {
        return None;
    }
    Some(t)
}

/// Intersect a ray with a triangle, deriving the local surface geometry.
///
/// The normal is the flat geometric normal `edge_one × edge_two`
/// (normalized), fixed by the vertex winding; it is not flipped toward
/// the ray, so back-facing hits get a normal pointing away from it.
pub fn intersect_triangle_geo(ray: &Ray, tri: &Triangle) -> Option<RayHit> {
    let t = intersect_triangle(ray, tri)?;
    let position = ray.at(t);
    let normal = tri.edge_one.cross(&tri.edge_two);
    Some(RayHit::new(t, LocalGeo::new(position, normal)))
}
