//! Axis-aligned bounding boxes and the ray slab test.

use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::Ray;

/// A coordinate axis used as a BSP splitting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in cycling order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the next axis in the cycle X -> Y -> Z -> X.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Returns the coordinate index of this axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// An axis-aligned bounding box.
///
/// A box is well-formed when `min <= max` on every axis. [`Aabb::empty`]
/// deliberately violates this: its `min` is `+inf` and its `max` is `-inf`,
/// so it is the identity of [`Aabb::union`] and can seed a fold over any
/// number of boxes, including none.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    /// Creates a box from its minimum and maximum corners.
    ///
    /// The corners are taken as given; use [`Aabb::from_corners`] when the
    /// ordering of the two points is unknown.
    #[inline]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates the smallest box containing two arbitrary corner points.
    pub fn from_corners(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Creates a box centered on `center` extending `half_size` along each axis.
    pub fn from_center(center: Point3<f64>, half_size: Vector3<f64>) -> Self {
        Self::from_corners(center - half_size, center + half_size)
    }

    /// Returns the empty sentinel box (`min = +inf`, `max = -inf`).
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Returns `true` if the box contains no points (`min > max` on some axis).
    pub fn is_empty(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|axis| self.min[axis.index()] > self.max[axis.index()])
    }

    /// Returns `true` if every coordinate of both corners is finite.
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|c| c.is_finite())
    }

    /// Returns `true` if the box is finite and well-ordered.
    ///
    /// Zero-thickness boxes (flat or point objects) are valid.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && !self.is_empty()
    }

    /// Returns the coordinate-wise union of two boxes.
    #[inline]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Grows this box in place to also contain `other`.
    #[inline]
    pub fn grow(&mut self, other: &Aabb) {
        *self = self.union(other);
    }

    /// Returns the overlap of two boxes, which is empty if they are disjoint.
    #[inline]
    pub fn intersection(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.sup(&other.min),
            max: self.max.inf(&other.max),
        }
    }

    /// Returns `true` if `other` lies entirely within this box.
    pub fn contains_box(&self, other: &Aabb) -> bool {
        Axis::ALL.iter().all(|axis| {
            let i = axis.index();
            self.min[i] <= other.min[i] && other.max[i] <= self.max[i]
        })
    }

    /// Returns the `(min, max)` extent of the box along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        (self.min[axis.index()], self.max[axis.index()])
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Point3<f64> {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Returns the edge lengths of the box.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Slab test returning the parametric span `(t_enter, t_exit)` of the ray
    /// inside the box.
    ///
    /// `t_enter` may be negative when the ray starts inside the box. Returns
    /// `None` when the ray misses the box or the box lies entirely behind
    /// the ray origin. Axis-parallel rays are handled through the infinite
    /// components of the ray's inverse direction.
    pub fn slab(&self, ray: &Ray) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }

        let bounds = [self.min, self.max];
        let origin = ray.origin();
        let inv = ray.inv_direction();
        let sign = ray.sign();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in Axis::ALL {
            let i = axis.index();
            let t_near = (bounds[sign[i]][i] - origin[i]) * inv[i];
            let t_far = (bounds[1 - sign[i]][i] - origin[i]) * inv[i];

            // `f64::max`/`min` drop NaN (origin exactly on a slab plane of an
            // axis-parallel ray), which keeps that axis unconstrained.
            t_min = t_min.max(t_near);
            t_max = t_max.min(t_far);
        }

        if t_max >= t_min && t_max >= 0.0 {
            Some((t_min, t_max))
        } else {
            None
        }
    }

    /// Slab test returning the entry distance of the ray into the box.
    ///
    /// The entry distance is clamped to zero when the ray starts inside.
    #[inline]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        self.slab(ray).map(|(t_enter, _)| t_enter.max(0.0))
    }

    /// Slab test restricted to the clip region spanned by `min` and `max`.
    ///
    /// The ray is tested against the overlap of this box and the clip
    /// region, so only the part of the ray's path that lies inside both
    /// counts as a hit. Returns the entry distance into that overlap.
    pub fn intersect_ray_clipped(
        &self,
        ray: &Ray,
        max: &Point3<f64>,
        min: &Point3<f64>,
    ) -> Option<f64> {
        self.intersection(&Aabb::new(*min, *max)).intersect_ray(ray)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}] - [{}, {}, {}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

impl FromIterator<Aabb> for Aabb {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Aabb::empty(), |acc, bounds| acc.union(&bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn axis_cycles() {
        assert_eq!(Axis::X.next(), Axis::Y);
        assert_eq!(Axis::Y.next(), Axis::Z);
        assert_eq!(Axis::Z.next(), Axis::X);
        assert_eq!(Axis::default(), Axis::X);
        assert_eq!(Axis::Z.to_string(), "z");
    }

    #[test]
    fn empty_is_union_identity() {
        let empty = Aabb::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_valid());
        assert_eq!(empty.union(&unit_box()), unit_box());
        assert_eq!(unit_box().union(&empty), unit_box());
    }

    #[test]
    fn union_of_many_boxes() {
        let boxes = [
            Aabb::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(0.0, 1.0, 3.0)),
            Aabb::new(Point3::new(4.0, -2.0, 0.0), Point3::new(5.0, 0.0, 1.0)),
        ];
        let merged: Aabb = boxes.iter().copied().collect();
        assert_eq!(merged.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(merged.max, Point3::new(5.0, 1.0, 3.0));

        let none: Aabb = std::iter::empty().collect();
        assert!(none.is_empty());
    }

    #[test]
    fn from_corners_orders_points() {
        let b = Aabb::from_corners(Point3::new(1.0, -1.0, 3.0), Point3::new(-1.0, 1.0, 0.0));
        assert_eq!(b.min, Point3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 3.0));
        assert!(b.is_valid());
    }

    #[test]
    fn validity_checks() {
        let flat = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0));
        assert!(flat.is_valid());

        let inverted = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
        assert!(!inverted.is_valid());

        let nan = Aabb::new(Point3::new(f64::NAN, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(!nan.is_finite());
        assert!(!nan.is_valid());
    }

    #[test]
    fn intersection_and_containment() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 2.0, 2.0));
        let overlap = a.intersection(&b);
        assert_eq!(overlap.min, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(overlap.max, Point3::new(1.0, 1.0, 1.0));
        assert!(a.contains_box(&overlap));
        assert!(!a.contains_box(&b));

        let far = Aabb::new(Point3::new(3.0, 3.0, 3.0), Point3::new(4.0, 4.0, 4.0));
        assert!(a.intersection(&far).is_empty());
    }

    #[test]
    fn extent_center_size() {
        let b = Aabb::new(Point3::new(-1.0, 2.0, 0.0), Point3::new(3.0, 4.0, 10.0));
        assert_eq!(b.extent(Axis::X), (-1.0, 3.0));
        assert_eq!(b.extent(Axis::Y), (2.0, 4.0));
        assert_eq!(b.extent(Axis::Z), (0.0, 10.0));
        assert_eq!(b.center(), Point3::new(1.0, 3.0, 5.0));
        assert_eq!(b.size(), Vector3::new(4.0, 2.0, 10.0));
    }

    #[test]
    fn ray_hits_box_front() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let (t_enter, t_exit) = unit_box().slab(&ray).unwrap();
        assert_relative_eq!(t_enter, 5.0, epsilon = 1e-12);
        assert_relative_eq!(t_exit, 6.0, epsilon = 1e-12);
        assert_relative_eq!(unit_box().intersect_ray(&ray).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_misses_box() {
        let ray = Ray::new(Point3::new(-5.0, 5.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(unit_box().intersect_ray(&ray).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0));
        assert!(unit_box().intersect_ray(&ray).is_none());
    }

    #[test]
    fn ray_inside_box_enters_at_zero() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.0, 1.0, 0.0));
        let (t_enter, t_exit) = unit_box().slab(&ray).unwrap();
        assert!(t_enter < 0.0);
        assert_relative_eq!(t_exit, 0.5, epsilon = 1e-12);
        assert_eq!(unit_box().intersect_ray(&ray), Some(0.0));
    }

    #[test]
    fn ray_hits_flat_box() {
        let floor = Aabb::new(Point3::new(-10.0, 0.0, -10.0), Point3::new(10.0, 0.0, 10.0));
        let ray = Ray::new(Point3::new(0.0, 3.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(floor.intersect_ray(&ray).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_on_slab_boundary_counts_as_inside() {
        // Origin lies exactly on the y = 0 face; direction has no y component.
        let ray = Ray::new(Point3::new(-2.0, 0.0, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(unit_box().intersect_ray(&ray).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_box_is_never_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert!(Aabb::empty().intersect_ray(&ray).is_none());
    }

    #[test]
    fn clipped_test_respects_region() {
        let long = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 1.0, 1.0));
        let ray = Ray::new(Point3::new(-1.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));

        // Clip region covering only the far half of the box.
        let max = Point3::new(20.0, 1.0, 1.0);
        let min = Point3::new(5.0, 0.0, 0.0);
        let entry = long.intersect_ray_clipped(&ray, &max, &min).unwrap();
        assert_relative_eq!(entry, 6.0, epsilon = 1e-12);

        // Clip region disjoint from the box.
        let max = Point3::new(30.0, 1.0, 1.0);
        let min = Point3::new(20.0, 0.0, 0.0);
        assert!(long.intersect_ray_clipped(&ray, &max, &min).is_none());
    }
}
