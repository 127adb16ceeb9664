use relief3d::math::{Real, PI};
use relief3d::shape::HeightGrid;
use relief3d::transformation::{CylindricalRescale, SolidLayout, SolidSection};

/// The volume under the piecewise-linear surface: each surface triangle covers a
/// footprint of area 1/2 at the mean height of its vertices.
fn volume_under_surface(grid: &HeightGrid) -> Real {
    let solid = grid.to_solid().unwrap();
    let layout = SolidLayout::new(grid.nrows(), grid.ncols());
    let (_, range) = layout
        .sections()
        .find(|(section, _)| matches!(section, SolidSection::Surface(_)))
        .unwrap();

    solid.triangles()[range]
        .iter()
        .map(|t| 0.5 * (t.a.z + t.b.z + t.c.z) / 3.0)
        .sum()
}

#[test]
fn flat_grid_encloses_a_box() {
    let grid = HeightGrid::from_fn(5, 7, |_, _| 3.0).unwrap();
    let solid = grid.to_solid().unwrap();

    assert_relative_eq!(solid.signed_volume(), 4.0 * 6.0 * 3.0, epsilon = 1.0e-3);
    let aabb = solid.aabb();
    assert_relative_eq!(aabb.volume(), 4.0 * 6.0 * 3.0, epsilon = 1.0e-3);
}

#[test]
fn random_grids_are_closed_and_outward_oriented() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..10 {
        let nrows = rng.rand_range(2..20) as usize;
        let ncols = rng.rand_range(2..20) as usize;
        let grid = super::random_grid(&mut rng, nrows, ncols, 5.0);
        let solid = grid.to_solid().unwrap();

        let expected = volume_under_surface(&grid);
        assert!(solid.signed_volume() > 0.0);
        assert_relative_eq!(solid.signed_volume(), expected, max_relative = 1.0e-3);
    }
}

#[test]
fn rescaled_volume_follows_the_axis_scales() {
    let grid = HeightGrid::from_fn(3, 5, |_, _| 2.0).unwrap();
    let raw_volume = grid.to_solid().unwrap().signed_volume();
    let rescale = CylindricalRescale {
        radius: 1.0,
        scale: 1.0,
        zscale: 2.0,
        base: 0.0,
    };
    let mesh = grid.to_solid().unwrap().rescale(&rescale).unwrap();

    // x is mapped from [0, 2] to [0, π], y from [0, 4] to [0, 2π], z doubled.
    let factor = (PI / 2.0) * (2.0 * PI / 4.0) * 2.0;
    assert_relative_eq!(mesh.signed_volume(), raw_volume * factor, max_relative = 1.0e-3);
    assert!(mesh.area() > 0.0);
}
