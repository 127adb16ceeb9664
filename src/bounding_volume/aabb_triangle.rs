use crate::math::*;
use crate::{bounding_volume::Aabb, shape::Triangle};

impl Triangle {
    /// Computes the [`Aabb`] of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let a = &self.a.coords;
        let b = &self.b.coords;
        let c = &self.c.coords;

        let mut min = Point::origin();
        let mut max = Point::origin();

        for d in 0..DIM {
            min.coords[d] = a[d].min(b[d]).min(c[d]);
            max.coords[d] = a[d].max(b[d]).max(c[d]);
        }

        Aabb::new(min, max)
    }
}
