use relief3d::math::{Point, Real};
use relief3d::transformation::{SolidLayout, SolidSection};

fn contains(points: &[Point<Real>], pt: &Point<Real>) -> bool {
    points.iter().any(|p| p == pt)
}

#[test]
fn wall_tops_match_surface_edges_exactly() {
    let mut rng = oorandom::Rand32::new(7);
    let (nrows, ncols) = (5, 8);
    let grid = super::random_grid(&mut rng, nrows, ncols, 10.0);
    let solid = grid.to_solid().unwrap();
    let layout = SolidLayout::new(nrows, ncols);

    let mut surface = Vec::new();
    let mut wall_tops = Vec::new();
    for (section, range) in layout.sections() {
        let vertices = solid.triangles()[range].iter().flat_map(|t| t.vertices());
        match section {
            SolidSection::Surface(_) => surface.extend(vertices),
            // Heights are at least 1, so every vertex above zero is a top vertex.
            SolidSection::Wall(_) => wall_tops.extend(vertices.filter(|p| p.z != 0.0)),
            SolidSection::Base(_) => {}
        }
    }

    for pt in &wall_tops {
        assert!(contains(&surface, pt), "{pt:?} is not a surface vertex");
    }

    // Every border sample of the grid appears on a wall.
    for i in 0..nrows {
        for j in [0, ncols - 1] {
            let pt = Point::new(i as Real, j as Real, grid.height(i, j));
            assert!(contains(&wall_tops, &pt));
        }
    }
    for j in 0..ncols {
        for i in [0, nrows - 1] {
            let pt = Point::new(i as Real, j as Real, grid.height(i, j));
            assert!(contains(&wall_tops, &pt));
        }
    }
}

#[test]
fn wall_bottoms_lie_on_the_base_outline() {
    let mut rng = oorandom::Rand32::new(8);
    let grid = super::random_grid(&mut rng, 4, 6, 2.0);
    let solid = grid.to_solid().unwrap();
    let layout = SolidLayout::new(4, 6);

    for (section, range) in layout.sections() {
        if let SolidSection::Wall(_) = section {
            for pt in solid.triangles()[range].iter().flat_map(|t| t.vertices()) {
                if pt.z == 0.0 {
                    let on_x_border = pt.x == 0.0 || pt.x == 3.0;
                    let on_y_border = pt.y == 0.0 || pt.y == 5.0;
                    assert!(on_x_border || on_y_border, "{section}: {pt:?}");
                }
            }
        }
    }
}
