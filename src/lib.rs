/*!
relief3d
========

**relief3d** turns a 2D elevation grid (a grayscale heightmap) into a closed
triangulated solid: a draped top surface, four vertical walls and a flat base,
all wound so that face normals point outward. The raw solid is then mapped onto
a cylindrical band in physical units and can be written as STL or Wavefront OBJ.

```
# #[cfg(feature = "f32")] {
use relief3d::shape::HeightGrid;
use relief3d::transformation::{number_of_triangles, CylindricalRescale};

let grid = HeightGrid::from_fn(3, 4, |i, j| (i + j) as f32).unwrap();
let solid = grid.to_solid().unwrap();
assert_eq!(solid.len(), number_of_triangles(3, 4));

let mesh = solid.rescale(&CylindricalRescale::default()).unwrap();
assert_eq!(mesh.len(), number_of_triangles(3, 4));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive. Use the `relief3d` crate for `f32` and `relief3d-f64` for `f64`.");

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod model;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;

    /// Archimedes’ constant, with the precision of [`Real`].
    #[cfg(feature = "f64")]
    pub use core::f64::consts::PI;

    /// Archimedes’ constant, with the precision of [`Real`].
    #[cfg(feature = "f32")]
    pub use core::f32::consts::PI;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{DMatrix, Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
