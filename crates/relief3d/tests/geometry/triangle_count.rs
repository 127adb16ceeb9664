use relief3d::transformation::{number_of_triangles, SolidLayout};

#[test]
fn emitted_count_matches_the_formula() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..20 {
        let nrows = rng.rand_range(2..30) as usize;
        let ncols = rng.rand_range(2..30) as usize;
        let grid = super::random_grid(&mut rng, nrows, ncols, 3.0);
        let solid = grid.to_solid().unwrap();

        assert_eq!(solid.len(), number_of_triangles(nrows, ncols));
        assert_eq!(
            SolidLayout::new(nrows, ncols).num_triangles(),
            number_of_triangles(nrows, ncols)
        );
    }
}

#[test]
fn smallest_grid_has_twelve_triangles() {
    assert_eq!(number_of_triangles(2, 2), 12);
    // 6x4 gives 30 surface, 32 wall and 2 base triangles.
    assert_eq!(number_of_triangles(6, 4), 64);
}
