//! Shapes consumed and produced by the relief generator.

pub use self::height_grid::HeightGrid;
pub use self::quad_template::{
    Handedness, QuadOffset, QuadTemplate, TriangleOffsets, LOWER_TRIANGLE, UPPER_TRIANGLE,
};
pub use self::triangle::Triangle;

mod height_grid;
#[cfg(feature = "image")]
mod height_grid_image;
mod quad_template;
mod triangle;
