use relief3d::math::Real;
use relief3d::shape::{Handedness, HeightGrid, Triangle};
use relief3d::transformation::{
    generate_side_from_tokens, generate_surface, ReliefError, TriangleCursor,
};

fn surface(grid: &HeightGrid, handedness: Handedness) -> Vec<Triangle> {
    let mut slots = vec![Triangle::zero(); 2 * (grid.nrows() - 1) * (grid.ncols() - 1)];
    let mut cursor = TriangleCursor::new(&mut slots);
    generate_surface(grid, handedness, &mut cursor).unwrap();
    let _ = cursor.finish().unwrap();
    slots
}

#[test]
fn left_and_right_surfaces_are_reversed() {
    let grid = HeightGrid::from_fn(4, 3, |i, j| (i * 3 + j) as Real * 0.5).unwrap();
    let right = surface(&grid, Handedness::Right);
    let left = surface(&grid, Handedness::Left);

    for (r, l) in right.iter().zip(left.iter()) {
        assert_eq!(r.reversed(), *l);
        assert_relative_eq!(r.scaled_normal(), -l.scaled_normal());
        assert!(l.scaled_normal().z > 0.0);
    }
}

#[test]
fn unknown_tokens_are_rejected_without_writing() {
    let grid = HeightGrid::from_fn(3, 3, |_, _| 1.0).unwrap();
    let mut slots = vec![Triangle::zero(); 4];
    let mut cursor = TriangleCursor::new(&mut slots);

    for (dimension, handedness) in [("x", "u"), ("z", "r")] {
        assert!(matches!(
            generate_side_from_tokens(&grid, dimension, 0, handedness, &mut cursor),
            Err(ReliefError::InvalidArgument(_))
        ));
        assert_eq!(cursor.position(), 0);
    }
    drop(cursor);

    assert!(slots.iter().all(|t| *t == Triangle::zero()));
}
