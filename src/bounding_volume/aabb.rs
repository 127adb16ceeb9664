//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Triangle;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. The relief generator uses it to
/// find the observed extent of a triangle buffer along each axis, which is the
/// normalizer of the cylindrical rescale.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use relief3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ];
/// let aabb = Aabb::from_points(points);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    ///
    /// Each component should be less than or equal to the corresponding component in `maxs`.
    pub mins: Point<Real>,

    /// The point with maximum coordinates.
    ///
    /// Each component should be greater than or equal to the corresponding component in `mins`.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. This is the neutral element of [`Aabb::merge`] and
    /// [`Aabb::take_point`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut aabb = Self::new_invalid();
        for pt in pts {
            aabb.take_point(pt);
        }
        aabb
    }

    /// Creates a new AABB enclosing every vertex of the given triangles.
    pub fn from_triangles<'a, I>(triangles: I) -> Self
    where
        I: IntoIterator<Item = &'a Triangle>,
    {
        let mut aabb = Self::new_invalid();
        for tri in triangles {
            aabb.merge(&tri.local_aabb());
        }
        aabb
    }

    /// Returns `true` if `mins <= maxs` on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The volume of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this `Aabb` so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// Does this AABB contain the given point?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}
