use relief3d::math::{Real, PI};
use relief3d::shape::HeightGrid;
use relief3d::transformation::{CylindricalRescale, ReliefError, ReliefParameters};

#[test]
fn five_by_five_grid_spans_half_and_full_circumference() {
    let grid = HeightGrid::from_fn(5, 5, |i, j| 1.0 + (i * j) as Real).unwrap();
    let rescale = CylindricalRescale::from(&ReliefParameters {
        radius: 10.0,
        scale: 1.0,
        ..Default::default()
    });
    let mesh = grid.to_solid().unwrap().rescale(&rescale).unwrap();
    let aabb = mesh.aabb();

    assert_relative_eq!(aabb.maxs.x, 10.0 * PI, epsilon = 1.0e-4);
    assert_relative_eq!(aabb.maxs.y, 20.0 * PI, epsilon = 1.0e-4);
    assert_relative_eq!(aabb.maxs.z, grid.max_height(), epsilon = 1.0e-4);
    assert_eq!(aabb.mins.z, 0.0);
}

#[test]
fn flat_zero_grid_is_lifted_by_the_base() {
    let grid = HeightGrid::from_fn(2, 2, |_, _| 0.0).unwrap();
    let solid = grid.to_solid().unwrap();

    assert_eq!(solid.len(), 12);
    assert!(solid
        .triangles()
        .iter()
        .all(|t| t.vertices().iter().all(|p| p.z == 0.0)));

    let rescale = CylindricalRescale {
        base: 5.0,
        ..Default::default()
    };
    let mesh = solid.rescale(&rescale).unwrap();
    assert!(mesh
        .triangles()
        .iter()
        .all(|t| t.vertices().iter().all(|p| p.z == 5.0)));
}

#[test]
fn scale_and_zscale_multiply_heights() {
    let grid = HeightGrid::from_fn(3, 3, |_, _| 2.0).unwrap();
    let rescale = CylindricalRescale {
        radius: 1.0,
        scale: 2.0,
        zscale: 3.0,
        base: 1.0,
    };
    let mesh = grid.to_solid().unwrap().rescale(&rescale).unwrap();
    let aabb = mesh.aabb();

    assert_relative_eq!(aabb.maxs.z, 2.0 * 3.0 * 2.0 + 1.0);
    assert_relative_eq!(aabb.mins.z, 1.0);
    assert_relative_eq!(aabb.maxs.x, 2.0 * PI, epsilon = 1.0e-5);
}

#[test]
fn invalid_parameters_are_reported() {
    let params = ReliefParameters {
        resolution_factor: 0.0,
        ..Default::default()
    };
    let err: ReliefError = params.validate().unwrap_err().into();
    assert!(matches!(err, ReliefError::InvalidArgument(_)));
}
