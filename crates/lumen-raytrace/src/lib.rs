#![warn(missing_docs)]

//! Ray-primitive intersection for the lumen render kernel.
//!
//! This crate is the geometric core of the renderer: rays, the local
//! geometry produced at a hit point, and closed-form intersection tests
//! for the analytic primitives (spheres, triangles). Scene traversal,
//! acceleration structures, and shading all sit above this crate and
//! consume the [`Shape`] contract it defines.
//!
//! # Architecture
//!
//! - [`Ray`] - Parametric ray with a valid `[t_min, t_max]` interval
//! - [`LocalGeo`] - Surface position and unit normal at an intersection
//! - [`RayHit`] - Hit parameter plus local geometry
//! - [`Shape`] - Intersection capability implemented by each primitive
//! - [`intersect`] - Per-primitive intersection algorithms
//!
//! # Example
//!
//! ```
//! use lumen_math::{Point3, Vec3};
//! use lumen_raytrace::{Ray, Shape, Sphere};
//!
//! let sphere = Sphere::new(Point3::origin(), 1.0);
//! let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//!
//! let hit = sphere.intersect_geo(&ray).expect("ray aims at the sphere");
//! assert!((hit.t - 4.0).abs() < 1e-9);
//! ```

mod error;
pub mod intersect;
mod ray;
mod shape;

pub use error::ShapeError;
pub use ray::{LocalGeo, Ray, RayHit};
pub use shape::{Shape, Sphere, Triangle};
