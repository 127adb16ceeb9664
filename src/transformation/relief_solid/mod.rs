//! Triangulation of a height grid into a closed solid, and its cylindrical rescale.

pub use self::cursor::TriangleCursor;
pub use self::error::{InvalidArgument, ReliefError};
pub use self::layout::{
    number_of_triangles, BorderIndex, SideAxis, SolidLayout, SolidSection, Wall, SOLID_SECTIONS,
};
pub use self::parameters::ReliefParameters;
pub use self::rescale::CylindricalRescale;
pub use self::solid::{RawSolid, ReliefMesh};
pub use self::triangulate::{
    generate_base, generate_section, generate_side, generate_side_from_tokens, generate_surface,
};

mod cursor;
mod error;
mod layout;
mod parameters;
mod rescale;
mod solid;
mod triangulate;
