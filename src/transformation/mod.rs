//! Transformation of height grids into closed solids, and export of the resulting meshes.

pub use self::relief_solid::*;
pub use self::stl::{read_stl, read_stl_file, write_stl, write_stl_file, StlFormat};

mod relief_solid;
pub mod stl;

#[cfg(feature = "wavefront")]
pub mod wavefront;
