//! Axis-aligned box primitive.

use nalgebra::{Point3, Vector3};

use crate::{Aabb, Object, Ray, HIT_EPSILON};

/// A solid axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    bounds: Aabb,
}

impl Cuboid {
    /// Creates a box centered on `center` extending `half_size` along each axis.
    pub fn new(center: Point3<f64>, half_size: Vector3<f64>) -> Self {
        Self {
            bounds: Aabb::from_center(center, half_size),
        }
    }

    /// Creates a box occupying exactly `bounds`.
    pub fn from_bounds(bounds: Aabb) -> Self {
        Self { bounds }
    }
}

impl Object for Cuboid {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Distance to the entry face, or to the exit face when the ray starts
    /// inside the box.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let (t_enter, t_exit) = self.bounds.slab(ray)?;
        if t_enter > HIT_EPSILON {
            Some(t_enter)
        } else if t_exit > HIT_EPSILON {
            Some(t_exit)
        } else {
            None
        }
    }
}
