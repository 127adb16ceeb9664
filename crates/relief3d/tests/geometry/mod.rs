mod closed_solid;
mod cylindrical_rescale;
mod handedness;
mod seams;
mod stl_roundtrip;
mod triangle_count;

use relief3d::math::Real;
use relief3d::shape::HeightGrid;

/// A grid of pseudo-random heights in `[1, 1 + amplitude)`.
pub fn random_grid(
    rng: &mut oorandom::Rand32,
    nrows: usize,
    ncols: usize,
    amplitude: Real,
) -> HeightGrid {
    HeightGrid::from_fn(nrows, ncols, |_, _| {
        1.0 + amplitude * rng.rand_float() as Real
    })
    .unwrap()
}
