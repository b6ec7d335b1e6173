//! Triangle primitive.

use nalgebra::{Point3, Vector3};

use crate::{Aabb, Object, Ray, HIT_EPSILON};

/// A triangle in 3D space, defined by three vertices.
///
/// Both faces can be hit; there is no back-face culling.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    ///
    /// The winding order determines the normal direction via the right-hand rule:
    /// normal = (b - a) × (c - a)
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>; 3] {
        &self.vertices
    }

    /// Computes the (unnormalized) normal vector of the triangle.
    pub fn normal(&self) -> Vector3<f64> {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Computes the unit normal vector of the triangle.
    ///
    /// Returns `None` if the triangle is degenerate (zero area).
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal();
        let len = n.norm();
        if len > f64::EPSILON {
            Some(n / len)
        } else {
            None
        }
    }

    /// Computes the centroid of the triangle.
    pub fn centroid(&self) -> Point3<f64> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }
}

impl Object for Triangle {
    fn bounds(&self) -> Aabb {
        let [a, b, c] = &self.vertices;
        Aabb::new(a.inf(b).inf(c), a.sup(b).sup(c))
    }

    /// Möller–Trumbore ray/triangle test.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let [v0, v1, v2] = &self.vertices;
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let direction = ray.direction();

        let p = direction.cross(&e2);
        let det = e1.dot(&p);
        // Parallel to the plane, or degenerate.
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let t_vec = ray.origin() - v0;
        let u = t_vec.dot(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = t_vec.cross(&e1);
        let v = direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(&q) * inv_det;
        (t > HIT_EPSILON).then_some(t)
    }
}
