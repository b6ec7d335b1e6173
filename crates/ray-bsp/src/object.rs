//! The object capability the tree is built over.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Aabb, Ray};

/// Hits closer than this are ignored by the bundled primitives, so a ray
/// leaving a surface does not immediately hit that same surface.
pub const HIT_EPSILON: f64 = 1e-9;

/// A bounded object that can be hit by a ray.
///
/// This is the only thing the BSP tree knows about the geometry it indexes.
/// Implementations must uphold two contracts:
///
/// - [`bounds`](Object::bounds) returns a finite, well-ordered box that fully
///   contains the geometry. It is called once per object while the tree is
///   built.
/// - [`intersect`](Object::intersect) returns `None` on a miss, otherwise the
///   finite positive distance along the ray to the nearest hit. The hit point
///   must lie within `bounds`, or the tree may prune it.
pub trait Object {
    /// Returns the bounding box of the object.
    fn bounds(&self) -> Aabb;

    /// Returns the distance to the nearest hit along `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

impl<T: Object + ?Sized> Object for &T {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

impl<T: Object + ?Sized> Object for Box<T> {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

impl<T: Object + ?Sized> Object for Rc<T> {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

impl<T: Object + ?Sized> Object for Arc<T> {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

/// Index of an object in the order it was handed to the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the object in the builder's input.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
