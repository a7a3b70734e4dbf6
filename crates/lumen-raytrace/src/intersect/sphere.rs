//! Ray-sphere intersection (quadratic equation).

use crate::ray::{LocalGeo, Ray, RayHit};
use crate::shape::Sphere;

/// Intersect a ray with a sphere.
///
/// Solves `|oc + t*d|^2 = r^2` for `t` and returns the nearer root that
/// lies within the ray's `[t_min, t_max]` interval, or `None` if neither
/// does.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let oc = ray.origin - sphere.center;
    let d = ray.direction.as_ref();

    let a = d.dot(d); // Always 1 for unit direction, but explicit for clarity
    let b = 2.0 * d.dot(&oc);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // A tangent ray (discriminant zero) needs no separate branch:
    // sqrt(0) collapses both roots to -b/(2a).
    let sqrt_disc = discriminant.sqrt();
    // a > 0, so t1 <= t2.
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    if ray.contains(t1) {
        Some(t1)
    } else if ray.contains(t2) {
        Some(t2)
    } else {
        None
    }
}

/// Intersect a ray with a sphere, deriving the local surface geometry.
///
/// The normal points outward from the sphere's center.
pub fn intersect_sphere_geo(ray: &Ray, sphere: &Sphere) -> Option<RayHit> {
    let t = intersect_sphere(ray, sphere)?;
    let position = ray.at(t);
    let normal = position - sphere.center;
    Some(RayHit::new(t, LocalGeo::new(position, normal)))
}
