use super::SolidSection;
use crate::math::Real;

/// An argument or configuration value that the relief generator cannot use.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum InvalidArgument {
    /// The handedness token is neither `"r"` nor `"l"`.
    #[error("handedness `{0}` not recognized (must be `r` or `l`)")]
    Handedness(String),
    /// The wall dimension token is neither `"x"` nor `"y"`.
    #[error("dimension `{0}` not recognized (must be `x` or `y`)")]
    Dimension(String),
    /// The wall border index is neither `0` nor `-1`.
    #[error("border index {0} not recognized (must be 0 or -1)")]
    BorderIndex(isize),
    /// The height grid has fewer than 2 rows or 2 columns.
    #[error("a height grid must have at least 2 rows and 2 columns, got {nrows}x{ncols}")]
    GridTooSmall {
        /// The number of rows of the rejected grid.
        nrows: usize,
        /// The number of columns of the rejected grid.
        ncols: usize,
    },
    /// The number of heights does not match the grid dimensions.
    #[error("{len} heights cannot fill a {nrows}x{ncols} grid")]
    GridDataLength {
        /// The requested number of rows.
        nrows: usize,
        /// The requested number of columns.
        ncols: usize,
        /// The number of heights provided.
        len: usize,
    },
    /// A height sample is NaN or infinite.
    #[error("the height at ({i}, {j}) is not finite")]
    NonFiniteHeight {
        /// The row of the offending sample.
        i: usize,
        /// The column of the offending sample.
        j: usize,
    },
    /// The downsampling factor is smaller than 1 or not finite.
    #[error("the resolution factor must be a finite number >= 1, got {0}")]
    ResolutionFactor(Real),
    /// The cylinder radius is not strictly positive or not finite.
    #[error("the radius must be a finite number > 0, got {0}")]
    Radius(Real),
    /// A rescale parameter is not finite.
    #[error("the `{name}` parameter must be finite, got {value}")]
    NonFiniteParameter {
        /// The name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
}

/// Errors raised while building, rescaling or exporting a relief solid.
///
/// Every error aborts the current generation: a partially filled triangle
/// buffer never reaches the mesh writers.
#[derive(thiserror::Error, Debug)]
pub enum ReliefError {
    /// An argument or configuration value was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The rescale normalizer (the largest coordinate along an axis) is zero or not finite.
    #[error("cannot rescale along {axis}: the largest {axis} coordinate is {max} (grid {nrows}x{ncols})")]
    ArithmeticDegenerate {
        /// The axis with a degenerate extent (`'x'` or `'y'`).
        axis: char,
        /// The observed maximum along that axis.
        max: Real,
        /// The number of rows of the grid the solid was built from.
        nrows: usize,
        /// The number of columns of the grid the solid was built from.
        ncols: usize,
    },
    /// The number of emitted triangles differs from the number of pre-allocated slots.
    ///
    /// This indicates a defect of the triangulation, not a user error.
    #[error("{section}: {written} triangles emitted into a buffer of {expected} slots")]
    BufferSizeMismatch {
        /// The section being emitted when the mismatch was detected.
        section: SolidSection,
        /// The number of slots of the buffer.
        expected: usize,
        /// The number of triangles emitted (or attempted) so far.
        written: usize,
    },
    /// An STL stream could not be parsed.
    #[error("malformed STL data: {0}")]
    MalformedStl(String),
    /// An I/O error from reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The heightmap image could not be decoded.
    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
    /// The Wavefront file could not be written.
    #[cfg(feature = "wavefront")]
    #[error("wavefront export failed: {0:?}")]
    Wavefront(obj::ObjError),
}

#[cfg(feature = "wavefront")]
impl From<obj::ObjError> for ReliefError {
    fn from(err: obj::ObjError) -> Self {
        ReliefError::Wavefront(err)
    }
}
