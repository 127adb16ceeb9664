//! The unit-square template used to stamp every quad of the solid.

use crate::transformation::InvalidArgument;
use core::fmt;
use core::str::FromStr;

/// An offset `(k, l) ∈ {0, 1}²` inside of a unit quad.
pub type QuadOffset = [usize; 2];

/// The three offsets of one templated triangle.
pub type TriangleOffsets = [QuadOffset; 3];

/// The upper-left triangle of a unit quad, in its reference (right-handed) order.
pub const UPPER_TRIANGLE: TriangleOffsets = [[0, 0], [0, 1], [1, 0]];
/// The lower-right triangle of a unit quad, in its reference (right-handed) order.
pub const LOWER_TRIANGLE: TriangleOffsets = [[0, 1], [1, 1], [1, 0]];

/// The vertex ordering of a templated triangle.
///
/// This is the only knob controlling the orientation of the faces of the solid:
/// every section of the solid picks the handedness that makes its normals point
/// outward.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    /// Keep the reference vertex order `[0, 1, 2]` (token `"r"`).
    Right,
    /// Swap the last two vertices, i.e., use the order `[0, 2, 1]` (token `"l"`).
    Left,
}

impl Handedness {
    /// The permutation applied to the reference vertex order.
    #[inline]
    pub const fn permutation(self) -> [usize; 3] {
        match self {
            Handedness::Right => [0, 1, 2],
            Handedness::Left => [0, 2, 1],
        }
    }

    /// The opposite handedness.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }

    /// The single-letter token of this handedness.
    pub const fn token(self) -> &'static str {
        match self {
            Handedness::Right => "r",
            Handedness::Left => "l",
        }
    }
}

impl FromStr for Handedness {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Handedness::Right),
            "l" => Ok(Handedness::Left),
            _ => Err(InvalidArgument::Handedness(s.to_string())),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The two triangles covering a unit quad, with a given handedness.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use relief3d::shape::{Handedness, QuadTemplate};
///
/// let right = QuadTemplate::new(Handedness::Right);
/// let left = QuadTemplate::from_token("l").unwrap();
///
/// assert_eq!(right.triangles()[0], [[0, 0], [0, 1], [1, 0]]);
/// assert_eq!(left.triangles()[0], [[0, 0], [1, 0], [0, 1]]);
/// assert!(QuadTemplate::from_token("u").is_err());
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTemplate {
    handedness: Handedness,
    triangles: [TriangleOffsets; 2],
}

const fn permuted(tri: TriangleOffsets, perm: [usize; 3]) -> TriangleOffsets {
    [tri[perm[0]], tri[perm[1]], tri[perm[2]]]
}

impl QuadTemplate {
    /// The template with the reference vertex order.
    pub const RIGHT: QuadTemplate = QuadTemplate::new(Handedness::Right);
    /// The template with the last two vertices of each triangle swapped.
    pub const LEFT: QuadTemplate = QuadTemplate::new(Handedness::Left);

    /// Builds the template for the given handedness.
    pub const fn new(handedness: Handedness) -> Self {
        let perm = handedness.permutation();
        QuadTemplate {
            handedness,
            triangles: [
                permuted(UPPER_TRIANGLE, perm),
                permuted(LOWER_TRIANGLE, perm),
            ],
        }
    }

    /// Builds the template for a handedness token (`"r"` or `"l"`).
    pub fn from_token(handedness: &str) -> Result<Self, InvalidArgument> {
        Ok(Self::new(handedness.parse()?))
    }

    /// The handedness of this template.
    #[inline]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// The upper and lower triangles, in this order.
    #[inline]
    pub fn triangles(&self) -> [TriangleOffsets; 2] {
        self.triangles
    }
}
