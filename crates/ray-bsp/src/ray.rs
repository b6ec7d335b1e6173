//! Ray representation.

use nalgebra::{Point3, Vector3};

/// A ray in 3D space defined by an origin and a unit direction.
///
/// Distances reported by queries are parametric distances along the unit
/// direction, so they are Euclidean distances from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3<f64>,
    direction: Vector3<f64>,
    /// Reciprocal of the direction components for the slab test.
    inv_direction: Vector3<f64>,
    /// 0 where the direction component is non-negative, 1 where it is negative.
    sign: [usize; 3],
}

impl Ray {
    /// Creates a new ray. The direction is normalized.
    ///
    /// The direction must be non-zero and finite; a zero direction yields a
    /// ray whose every test misses or reports NaN distances.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        let direction = direction.normalize();
        let inv_direction = direction.map(|c| 1.0 / c);
        let sign = [
            usize::from(inv_direction.x < 0.0),
            usize::from(inv_direction.y < 0.0),
            usize::from(inv_direction.z < 0.0),
        ];
        Self {
            origin,
            direction,
            inv_direction,
            sign,
        }
    }

    /// Creates a ray starting at `from` and pointing towards `to`.
    pub fn towards(from: Point3<f64>, to: Point3<f64>) -> Self {
        Self::new(from, to - from)
    }

    /// Returns the ray origin.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Returns the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    #[inline]
    pub(crate) fn inv_direction(&self) -> Vector3<f64> {
        self.inv_direction
    }

    #[inline]
    pub(crate) fn sign(&self) -> [usize; 3] {
        self.sign
    }

    /// Evaluates the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}
