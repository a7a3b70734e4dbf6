//! Ray representation and the local geometry produced at a hit point.

use lumen_math::{Dir3, Point3, Vec3, RAY_EPSILON};

/// A ray in 3D space with a valid parameter interval.
///
/// Points on the ray are `origin + t * direction` for
/// `t` in `[t_min, t_max]`. `t_min <= t_max` is assumed, not enforced.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
    /// Smallest valid parameter.
    pub t_min: f64,
    /// Largest valid parameter.
    pub t_max: f64,
}

impl Ray {
    /// Create a ray from origin and direction.
    ///
    /// The direction will be normalized. `t_min` defaults to
    /// [`RAY_EPSILON`] so that a ray spawned on a surface does not
    /// re-intersect it; `t_max` defaults to infinity.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::with_range(origin, direction, RAY_EPSILON, f64::INFINITY)
    }

    /// Create a ray with a caller-supplied upper bound.
    ///
    /// Used for shadow rays bounded by the distance to the light.
    pub fn with_max(origin: Point3, direction: Vec3, t_max: f64) -> Self {
        Self::with_range(origin, direction, RAY_EPSILON, t_max)
    }

    /// Create a ray with a fully explicit parameter interval.
    pub fn with_range(origin: Point3, direction: Vec3, t_min: f64, t_max: f64) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
            t_min,
            t_max,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    ///
    /// `t` is clamped into `[t_min, t_max]` first, so the result always
    /// lies on the valid segment even for an out-of-range argument.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        let t = t.clamp(self.t_min, self.t_max);
        self.origin + t * self.direction.as_ref()
    }

    /// Whether `t` lies within the valid parameter interval.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Local surface geometry at an intersection: position and unit normal.
#[derive(Debug, Clone, Copy)]
pub struct LocalGeo {
    position: Point3,
    normal: Dir3,
}

impl LocalGeo {
    /// Create local geometry from a position and an (unnormalized) normal.
    pub fn new(position: Point3, normal: Vec3) -> Self {
        Self {
            position,
            normal: Dir3::new_normalize(normal),
        }
    }

    /// Surface position.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Unit surface normal.
    pub fn normal(&self) -> Dir3 {
        self.normal
    }

    /// Replace the surface position.
    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    /// Replace the surface normal. The input is normalized even if it is
    /// already unit length.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = Dir3::new_normalize(normal);
    }
}

/// Result of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Parameter along the ray where the intersection occurs.
    pub t: f64,
    /// Local surface geometry at the intersection.
    pub geo: LocalGeo,
}

impl RayHit {
    /// Create a new ray hit.
    pub fn new(t: f64, geo: LocalGeo) -> Self {
        Self { t, geo }
    }
}
