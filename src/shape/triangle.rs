//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// A triangle shape.
///
/// The order of the vertices encodes the orientation of the face: its normal
/// follows the right-hand rule, pointing along `AB × AC`.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        let [a, b, c] = arr;
        Self::new(a, b, c)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A triangle with its three vertices at the origin.
    ///
    /// Used to fill pre-allocated buffers before their slots are written.
    #[inline]
    pub fn zero() -> Triangle {
        Triangle::new(Point::origin(), Point::origin(), Point::origin())
    }

    /// The three vertices of this triangle, in order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The same triangle with its last two vertices swapped, i.e., with the opposite orientation.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.a, self.c, self.b)
    }

    /// Applies `f` to each vertex, preserving the vertex order.
    #[inline]
    #[must_use]
    pub fn map_vertices(&self, mut f: impl FnMut(Point<Real>) -> Point<Real>) -> Triangle {
        Triangle::new(f(self.a), f(self.b), f(self.c))
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` for degenerate (zero-area) triangles.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The signed volume of the tetrahedron formed by this triangle and the origin.
    ///
    /// Summed over a closed, outward-oriented mesh this gives the enclosed volume.
    #[inline]
    pub fn signed_volume_wrt_origin(&self) -> Real {
        self.a.coords.dot(&self.b.coords.cross(&self.c.coords)) / 6.0
    }
}

impl approx::AbsDiffEq for Triangle {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

/// Vertices are compared pairwise, in order: a triangle is not relatively equal
/// to a rotation or reversal of itself.
impl approx::RelativeEq for Triangle {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::shape::Triangle;

    #[test]
    fn test_triangle_area() {
        let pa = Point::new(0.0, 5.0, 0.0);
        let pb = Point::new(0.0, 0.0, 0.0);
        let pc = Point::new(0.0, 0.0, 4.0);

        assert!(relative_eq!(Triangle::new(pa, pb, pc).area(), 10.0));
    }

    #[test]
    fn reversed_triangle_has_opposite_normal() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );

        assert_eq!(*tri.normal().unwrap(), Vector::z());
        assert_eq!(*tri.reversed().normal().unwrap(), -Vector::z());
        assert!(tri.reversed().reversed() == tri);
    }

    #[test]
    fn approximate_equality_is_vertex_wise() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );
        let nudged = tri.map_vertices(|p| p + Vector::repeat(1.0e-4));

        assert_relative_eq!(tri, nudged, epsilon = 1.0e-3);
        assert!(!relative_eq!(tri, nudged, epsilon = 1.0e-6, max_relative = 1.0e-6));
        assert!(!abs_diff_eq!(tri, tri.reversed(), epsilon = 1.0e-3));
    }

    #[test]
    fn degenerate_triangle_has_no_normal() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert!(Triangle::new(p, p, Point::origin()).normal().is_none());
    }
}
