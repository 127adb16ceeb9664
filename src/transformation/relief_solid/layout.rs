use super::InvalidArgument;
use crate::shape::Handedness;
use core::fmt;
use core::ops::Range;
use core::str::FromStr;

/// The exact number of triangles of the solid built from a `nrows × ncols` grid.
///
/// This is `2·(x-1)·(y-1)` surface triangles, `4·((x-1)+(y-1))` wall triangles
/// and `2` base triangles, with `x = nrows` and `y = ncols`.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use relief3d::transformation::number_of_triangles;
/// assert_eq!(number_of_triangles(2, 2), 12);
/// assert_eq!(number_of_triangles(3, 5), 2 * 2 * 4 + 4 * (2 + 4) + 2);
/// # }
/// ```
#[inline]
pub const fn number_of_triangles(nrows: usize, ncols: usize) -> usize {
    2 * (nrows - 1) * (ncols - 1) + 4 * ((nrows - 1) + (ncols - 1)) + 2
}

/// The grid axis a wall runs along.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SideAxis {
    /// The wall runs along the first grid index (token `"x"`).
    X,
    /// The wall runs along the second grid index (token `"y"`).
    Y,
}

impl FromStr for SideAxis {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(SideAxis::X),
            "y" => Ok(SideAxis::Y),
            _ => Err(InvalidArgument::Dimension(s.to_string())),
        }
    }
}

impl fmt::Display for SideAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SideAxis::X => f.write_str("x"),
            SideAxis::Y => f.write_str("y"),
        }
    }
}

/// Which of the two borders orthogonal to a [`SideAxis`] a wall stands on.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BorderIndex {
    /// The border at index `0`.
    First,
    /// The border at index `-1`, i.e., the last sample.
    Last,
}

impl BorderIndex {
    /// The absolute index of this border among `len` samples.
    #[inline]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            BorderIndex::First => 0,
            BorderIndex::Last => len - 1,
        }
    }

    /// The signed sentinel value of this border (`0` or `-1`).
    #[inline]
    pub fn sentinel(self) -> isize {
        match self {
            BorderIndex::First => 0,
            BorderIndex::Last => -1,
        }
    }
}

impl TryFrom<isize> for BorderIndex {
    type Error = InvalidArgument;

    fn try_from(index: isize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(BorderIndex::First),
            -1 => Ok(BorderIndex::Last),
            _ => Err(InvalidArgument::BorderIndex(index)),
        }
    }
}

/// One of the four vertical walls of the solid.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    /// The axis the wall runs along.
    pub axis: SideAxis,
    /// The border the wall stands on.
    pub border: BorderIndex,
    /// The vertex ordering making this wall face outward.
    pub handedness: Handedness,
}

impl Wall {
    /// Describes a wall.
    pub const fn new(axis: SideAxis, border: BorderIndex, handedness: Handedness) -> Self {
        Self {
            axis,
            border,
            handedness,
        }
    }

    /// The number of unit segments along this wall for a `nrows × ncols` grid.
    #[inline]
    pub fn num_segments(&self, nrows: usize, ncols: usize) -> usize {
        match self.axis {
            SideAxis::X => nrows - 1,
            SideAxis::Y => ncols - 1,
        }
    }
}

/// A section of the solid, emitted as one contiguous run of triangles.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolidSection {
    /// The top surface draped over the grid.
    Surface(Handedness),
    /// A vertical wall dropping from the surface edge down to `z = 0`.
    Wall(Wall),
    /// The two triangles closing the solid at `z = 0`.
    Base(Handedness),
}

impl SolidSection {
    /// The number of triangles of this section for a `nrows × ncols` grid.
    pub fn num_triangles(&self, nrows: usize, ncols: usize) -> usize {
        match self {
            SolidSection::Surface(_) => 2 * (nrows - 1) * (ncols - 1),
            SolidSection::Wall(wall) => 2 * wall.num_segments(nrows, ncols),
            SolidSection::Base(_) => 2,
        }
    }
}

impl fmt::Display for SolidSection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolidSection::Surface(h) => write!(f, "surface ({h})"),
            SolidSection::Wall(wall) => write!(
                f,
                "side {} {} ({})",
                wall.axis,
                wall.border.sentinel(),
                wall.handedness
            ),
            SolidSection::Base(h) => write!(f, "base ({h})"),
        }
    }
}

/// The sections of a solid, in emission order.
///
/// The handedness of each section makes all the normals of the closed solid
/// point outward.
pub const SOLID_SECTIONS: [SolidSection; 6] = [
    SolidSection::Surface(Handedness::Left),
    SolidSection::Wall(Wall::new(SideAxis::X, BorderIndex::First, Handedness::Left)),
    SolidSection::Wall(Wall::new(SideAxis::X, BorderIndex::Last, Handedness::Right)),
    SolidSection::Wall(Wall::new(SideAxis::Y, BorderIndex::First, Handedness::Right)),
    SolidSection::Wall(Wall::new(SideAxis::Y, BorderIndex::Last, Handedness::Left)),
    SolidSection::Base(Handedness::Right),
];

/// The slot range of each of the [`SOLID_SECTIONS`] inside of the triangle buffer.
///
/// The layout is a pure function of the grid dimensions, so sections can be
/// written independently (and concurrently) into disjoint parts of the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidLayout {
    ranges: [Range<usize>; 6],
}

impl SolidLayout {
    /// Computes the layout for a `nrows × ncols` grid.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let mut start = 0;
        let ranges = SOLID_SECTIONS.map(|section| {
            let end = start + section.num_triangles(nrows, ncols);
            let range = start..end;
            start = end;
            range
        });

        Self { ranges }
    }

    /// The total number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.ranges[5].end
    }

    /// The slot ranges, in the order of [`SOLID_SECTIONS`].
    #[inline]
    pub fn ranges(&self) -> &[Range<usize>; 6] {
        &self.ranges
    }

    /// Iterates through each section with its slot range.
    pub fn sections(&self) -> impl Iterator<Item = (SolidSection, Range<usize>)> + '_ {
        SOLID_SECTIONS.into_iter().zip(self.ranges.iter().cloned())
    }

    /// Splits `slots` into one disjoint sub-slice per section.
    ///
    /// Returns `None` if `slots` does not have exactly [`Self::num_triangles`] elements.
    pub fn split_mut<'a, T>(&self, slots: &'a mut [T]) -> Option<Vec<(SolidSection, &'a mut [T])>> {
        if slots.len() != self.num_triangles() {
            return None;
        }

        let mut rest = slots;
        let mut parts = Vec::with_capacity(SOLID_SECTIONS.len());

        for (section, range) in self.sections() {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(range.len());
            parts.push((section, head));
            rest = tail;
        }

        Some(parts)
    }
}
