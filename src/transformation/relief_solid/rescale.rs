use super::{InvalidArgument, ReliefError, ReliefParameters};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, PI};
use crate::shape::Triangle;

/// Maps grid coordinates onto a band of a cylinder, in physical units.
///
/// Every vertex `(x, y, z)` is transformed into:
/// - `scale · π · radius · x / max(x)`,
/// - `scale · 2π · radius · y / max(y)`,
/// - `zscale · scale · z + base`,
///
/// where `max(x)` and `max(y)` are the largest coordinates observed over the
/// whole triangle buffer (surface, walls and base included).
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CylindricalRescale {
    /// The radius of the cylinder.
    pub radius: Real,
    /// The uniform scaling factor.
    pub scale: Real,
    /// The additional vertical exaggeration factor.
    pub zscale: Real,
    /// The vertical offset added after scaling.
    pub base: Real,
}

impl Default for CylindricalRescale {
    fn default() -> Self {
        Self::from(&ReliefParameters::default())
    }
}

impl From<&ReliefParameters> for CylindricalRescale {
    fn from(params: &ReliefParameters) -> Self {
        Self {
            radius: params.radius,
            scale: params.scale,
            zscale: params.zscale,
            base: params.base,
        }
    }
}

impl CylindricalRescale {
    /// Checks that the radius is finite and strictly positive, and that every
    /// other factor is finite.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(InvalidArgument::Radius(self.radius));
        }

        for (name, value) in [
            ("base", self.base),
            ("scale", self.scale),
            ("zscale", self.zscale),
        ] {
            if !value.is_finite() {
                return Err(InvalidArgument::NonFiniteParameter { name, value });
            }
        }

        Ok(())
    }

    /// Rescales every vertex of `triangles` in place.
    ///
    /// The normalizers are read from `triangles` before any vertex is modified.
    /// Fails, leaving `triangles` untouched, with
    /// [`ReliefError::InvalidArgument`] if [`Self::validate`] rejects this
    /// rescale, or with [`ReliefError::ArithmeticDegenerate`] if the largest `x`
    /// or `y` coordinate is zero or not finite. `grid_dims` is only used to give
    /// context to that error.
    pub fn apply(
        &self,
        triangles: &mut [Triangle],
        grid_dims: (usize, usize),
    ) -> Result<(), ReliefError> {
        self.validate()?;

        let aabb = Aabb::from_triangles(triangles.iter());
        let maxs = if aabb.is_valid() {
            aabb.maxs
        } else {
            Point::origin()
        };

        for (axis, max) in [('x', maxs.x), ('y', maxs.y)] {
            if max == 0.0 || !max.is_finite() {
                return Err(ReliefError::ArithmeticDegenerate {
                    axis,
                    max,
                    nrows: grid_dims.0,
                    ncols: grid_dims.1,
                });
            }
        }

        let sx = self.scale * PI * self.radius / maxs.x;
        let sy = self.scale * 2.0 * PI * self.radius / maxs.y;
        let sz = self.zscale * self.scale;

        for tri in triangles.iter_mut() {
            *tri = tri.map_vertices(|p| Point::new(sx * p.x, sy * p.y, sz * p.z + self.base));
        }

        log::debug!(
            "rescaled {} triangles (x/{}, y/{}, radius {}, scale {}, zscale {}, base {})",
            triangles.len(),
            maxs.x,
            maxs.y,
            self.radius,
            self.scale,
            self.zscale,
            self.base
        );

        Ok(())
    }
}
