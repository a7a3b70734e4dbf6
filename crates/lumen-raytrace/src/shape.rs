//! Primitive shapes and the intersection capability they implement.

use lumen_math::{Point3, Vec3, PARALLEL_EPSILON};

use crate::error::ShapeError;
use crate::intersect::{
    intersect_sphere, intersect_sphere_geo, intersect_triangle, intersect_triangle_geo,
};
use crate::ray::{Ray, RayHit};

/// The intersection capability implemented by every primitive.
///
/// Both operations consider only hits with parameter in the ray's
/// `[t_min, t_max]` interval and report a miss as `None`. Intersection
/// never mutates the primitive, so a shared primitive may be tested
/// against many rays concurrently.
///
/// Additional primitives (planes, boxes, meshes) extend this contract
/// without changes to existing implementors.
pub trait Shape: Send + Sync {
    /// Nearest hit parameter along the ray, if any.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Nearest hit parameter plus the local surface geometry at the hit.
    fn intersect_geo(&self, ray: &Ray) -> Option<RayHit>;
}

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere. Expected positive; `new` does not validate.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere. The radius is not validated.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create a sphere, rejecting a non-positive radius.
    pub fn try_new(center: Point3, radius: f64) -> Result<Self, ShapeError> {
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        intersect_sphere(ray, self)
    }

    fn intersect_geo(&self, ray: &Ray) -> Option<RayHit> {
        intersect_sphere_geo(ray, self)
    }
}

/// A triangle stored as one vertex plus two edge vectors.
///
/// The edges are precomputed at construction for the Möller-Trumbore
/// test; the other two vertices are not retained.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex of the triangle.
    pub vertex: Point3,
    /// Second vertex minus the first.
    pub edge_one: Vec3,
    /// Third vertex minus the first.
    pub edge_two: Vec3,
}

impl Triangle {
    /// Create a triangle from three vertices. Degeneracy is not validated.
    ///
    /// The vertex order fixes the geometric normal:
    /// `normalize(edge_one × edge_two)`, right-handed.
    pub fn new(v1: Point3, v2: Point3, v3: Point3) -> Self {
        Self {
            vertex: v1,
            edge_one: v2 - v1,
            edge_two: v3 - v1,
        }
    }

    /// Create a triangle, rejecting collinear or coincident vertices.
    pub fn try_new(v1: Point3, v2: Point3, v3: Point3) -> Result<Self, ShapeError> {
        let tri = Self::new(v1, v2, v3);
        if tri.edge_one.cross(&tri.edge_two).norm() < PARALLEL_EPSILON {
            return Err(ShapeError::DegenerateTriangle);
        }
        Ok(tri)
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        intersect_triangle(ray, self)
    }

    fn intersect_geo(&self, ray: &Ray) -> Option<RayHit> {
        intersect_triangle_geo(ray, self)
    }
}
