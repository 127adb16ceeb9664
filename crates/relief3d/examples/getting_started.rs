use relief3d::math::Real;
use relief3d::model::ReliefModel;
use relief3d::shape::HeightGrid;
use relief3d::transformation::{number_of_triangles, ReliefParameters, StlFormat};

fn main() {
    // A small crater: a ring of high ground around a flat floor.
    let grid = HeightGrid::from_fn(32, 64, |i, j| {
        let dx = i as Real - 15.5;
        let dy = (j as Real - 31.5) / 2.0;
        let r = (dx * dx + dy * dy).sqrt();
        10.0 + 40.0 * (-(r - 10.0) * (r - 10.0) / 8.0).exp()
    })
    .unwrap();

    let params = ReliefParameters {
        radius: 50.0,
        zscale: 0.2,
        ..Default::default()
    };
    let output = std::env::temp_dir().join("crater.png");
    let model = ReliefModel::new(&output, params);
    let mesh = model.generate_from_grid(&grid).unwrap();

    assert_eq!(mesh.len(), number_of_triangles(32, 64));
    assert!(mesh.signed_volume() > 0.0);

    let path = model.save(&mesh, None, StlFormat::Binary).unwrap();
    println!("{} triangles written to {}", mesh.len(), path.display());
}
