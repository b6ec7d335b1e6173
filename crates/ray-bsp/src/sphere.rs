//! Sphere primitive.

use nalgebra::{Point3, Vector3};

use crate::{Aabb, Object, Ray, HIT_EPSILON};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere. The radius is taken by absolute value.
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns the center of the sphere.
    #[inline]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Returns the radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Object for Sphere {
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, Vector3::repeat(self.radius))
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // |oc + t*d|^2 = r^2 with a unit direction d.
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(&ray.direction());
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        [-half_b - sqrt_disc, -half_b + sqrt_disc]
            .into_iter()
            .find(|&t| t > HIT_EPSILON)
    }
}
