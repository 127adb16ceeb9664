use crate::math::{DMatrix, Real};
use crate::transformation::InvalidArgument;

/// A rectangular grid of elevation samples.
///
/// The grid has `nrows() × ncols()` samples. The first index `i` runs along the
/// rows (the `x` axis of the generated solid), the second index `j` along the
/// columns (the `y` axis). A grid has at least 2 rows and 2 columns and only
/// finite heights; it is read-only once built.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    heights: DMatrix<Real>,
}

impl HeightGrid {
    /// Wraps a matrix of heights into a grid.
    ///
    /// Fails if the matrix has fewer than 2 rows or columns, or if any height is
    /// not finite.
    pub fn new(heights: DMatrix<Real>) -> Result<Self, InvalidArgument> {
        if heights.nrows() < 2 || heights.ncols() < 2 {
            return Err(InvalidArgument::GridTooSmall {
                nrows: heights.nrows(),
                ncols: heights.ncols(),
            });
        }

        if let Some(idx) = heights.iter().position(|h| !h.is_finite()) {
            let (i, j) = (idx % heights.nrows(), idx / heights.nrows());
            return Err(InvalidArgument::NonFiniteHeight { i, j });
        }

        if heights.min() < 0.0 {
            log::warn!(
                "the {}x{} grid has heights below zero: the surface will cross the base",
                heights.nrows(),
                heights.ncols()
            );
        }

        Ok(HeightGrid { heights })
    }

    /// Builds a grid by evaluating `f(i, j)` for every sample.
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl FnMut(usize, usize) -> Real,
    ) -> Result<Self, InvalidArgument> {
        Self::new(DMatrix::from_fn(nrows, ncols, f))
    }

    /// Builds a grid from heights given row after row.
    ///
    /// Fails if `heights.len() != nrows * ncols`.
    pub fn from_row_slice(
        nrows: usize,
        ncols: usize,
        heights: &[Real],
    ) -> Result<Self, InvalidArgument> {
        if heights.len() != nrows * ncols {
            return Err(InvalidArgument::GridDataLength {
                nrows,
                ncols,
                len: heights.len(),
            });
        }

        Self::new(DMatrix::from_row_slice(nrows, ncols, heights))
    }

    /// The number of samples along the first index (`x` in the generated solid).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.heights.nrows()
    }

    /// The number of samples along the second index (`y` in the generated solid).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.heights.ncols()
    }

    /// The height at sample `(i, j)`.
    ///
    /// Panics if the sample is out of bounds.
    #[inline]
    pub fn height(&self, i: usize, j: usize) -> Real {
        self.heights[(i, j)]
    }

    /// The heights of this grid.
    #[inline]
    pub fn heights(&self) -> &DMatrix<Real> {
        &self.heights
    }

    /// The smallest height of this grid.
    pub fn min_height(&self) -> Real {
        self.heights.min()
    }

    /// The largest height of this grid.
    pub fn max_height(&self) -> Real {
        self.heights.max()
    }

    /// Reduces the resolution of this grid by `factor`.
    ///
    /// Along each axis of length `n`, `floor(n / factor)` samples are kept, the
    /// `m`-th one being the sample at index `floor(factor * m)`. A factor of `1`
    /// returns an identical grid. Fails if `factor < 1` (or is not finite), or if
    /// the reduced grid would be smaller than 2×2.
    pub fn downsampled(&self, factor: Real) -> Result<Self, InvalidArgument> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(InvalidArgument::ResolutionFactor(factor));
        }

        let rows = strided_indices(self.nrows(), factor);
        let cols = strided_indices(self.ncols(), factor);

        if rows.len() < 2 || cols.len() < 2 {
            return Err(InvalidArgument::GridTooSmall {
                nrows: rows.len(),
                ncols: cols.len(),
            });
        }

        log::debug!(
            "downsampling a {}x{} grid by {} into {}x{}",
            self.nrows(),
            self.ncols(),
            factor,
            rows.len(),
            cols.len()
        );

        let heights = DMatrix::from_fn(rows.len(), cols.len(), |i, j| {
            self.heights[(rows[i], cols[j])]
        });
        Ok(HeightGrid { heights })
    }
}

// The count is derived from the remainder: 11 samples with a factor of 1.1 keep 9,
// while `(11.0 / 1.1).floor()` gives 10 once the quotient rounds up.
fn strided_indices(len: usize, factor: Real) -> Vec<usize> {
    let n = len as Real;
    let count = ((n - n % factor) / factor).round() as usize;
    (0..count)
        .map(|m| ((factor * m as Real) as usize).min(len - 1))
        .collect()
}
