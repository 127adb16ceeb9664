use relief3d::math::Real;
use relief3d::shape::HeightGrid;
use relief3d::transformation::{read_stl, write_stl, CylindricalRescale, StlFormat};

#[test]
fn stl_preserves_count_and_vertex_order() {
    let grid = HeightGrid::from_fn(6, 4, |i, j| 1.0 + ((i + 2 * j) % 5) as Real).unwrap();
    let mesh = grid
        .to_solid()
        .unwrap()
        .rescale(&CylindricalRescale::default())
        .unwrap();

    for format in [StlFormat::Binary, StlFormat::Ascii] {
        let mut bytes = Vec::new();
        write_stl(mesh.triangles(), &mut bytes, format, "relief").unwrap();
        let read = read_stl(&mut bytes.as_slice()).unwrap();

        assert_eq!(read.len(), mesh.len());
        for (read_tri, tri) in read.iter().zip(mesh.triangles()) {
            assert_relative_eq!(read_tri, tri, epsilon = 1.0e-5);
        }
    }
}
