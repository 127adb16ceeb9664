use super::{CylindricalRescale, InvalidArgument};
use crate::math::Real;

/// Parameters of a relief generation run.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReliefParameters {
    /// Factor by which the heightmap resolution is reduced before triangulation (`>= 1`).
    pub resolution_factor: Real,
    /// Radius of the cylinder the grid is mapped onto (`> 0`).
    pub radius: Real,
    /// Constant vertical offset added after scaling.
    pub base: Real,
    /// Uniform scaling factor applied to every coordinate.
    pub scale: Real,
    /// Additional vertical exaggeration factor.
    pub zscale: Real,
}

impl Default for ReliefParameters {
    fn default() -> Self {
        Self {
            resolution_factor: 1.0,
            radius: 10.0,
            base: 0.0,
            scale: 1.0,
            zscale: 1.0,
        }
    }
}

impl ReliefParameters {
    /// Checks that every parameter is in its valid range.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if !self.resolution_factor.is_finite() || self.resolution_factor < 1.0 {
            return Err(InvalidArgument::ResolutionFactor(self.resolution_factor));
        }

        CylindricalRescale::from(self).validate()
    }
}
