//! Closest-hit query results.

use crate::ObjectId;

/// The result of a closest-hit query.
///
/// A miss is represented by the sentinel returned from
/// [`Intersection::none`], whose distance is `+inf`. Comparing distances
/// therefore ranks a miss behind every real hit without special cases.
#[derive(Debug)]
pub struct Intersection<'a, O> {
    distance: f64,
    hit: Option<(ObjectId, &'a O)>,
}

// Manual impls: a derive would require `O: Clone`.
impl<O> Clone for Intersection<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Intersection<'_, O> {}

impl<O> Default for Intersection<'_, O> {
    fn default() -> Self {
        Self::none()
    }
}

impl<'a, O> Intersection<'a, O> {
    /// The "no hit" sentinel.
    #[inline]
    pub fn none() -> Self {
        Self {
            distance: f64::INFINITY,
            hit: None,
        }
    }

    /// A hit on `object` at `distance` along the ray.
    #[inline]
    pub fn new(distance: f64, id: ObjectId, object: &'a O) -> Self {
        Self {
            distance,
            hit: Some((id, object)),
        }
    }

    /// Returns `true` if an object was hit.
    #[inline]
    pub fn did_intersect(&self) -> bool {
        self.hit.is_some()
    }

    /// Distance along the ray to the hit, `+inf` for a miss.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The object that was hit.
    #[inline]
    pub fn object(&self) -> Option<&'a O> {
        self.hit.map(|(_, object)| object)
    }

    /// The id of the object that was hit.
    #[inline]
    pub fn object_id(&self) -> Option<ObjectId> {
        self.hit.map(|(id, _)| id)
    }

    /// Returns whichever result is closer. Ties go to `other`.
    #[inline]
    pub fn closer(self, other: Self) -> Self {
        if self.distance < other.distance {
            self
        } else {
            other
        }
    }
}
