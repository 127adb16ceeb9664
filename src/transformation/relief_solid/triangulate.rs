use super::{
    BorderIndex, ReliefError, SideAxis, SolidLayout, SolidSection, TriangleCursor, Wall,
    SOLID_SECTIONS,
};
use crate::math::{Point, Real};
use crate::shape::{Handedness, HeightGrid, QuadTemplate, Triangle};
use crate::transformation::RawSolid;

impl HeightGrid {
    /// Triangulates this grid into a closed solid, in grid units.
    ///
    /// The solid is made of the draped top surface, the four walls and the base,
    /// emitted in the order of [`SOLID_SECTIONS`] into a buffer of exactly
    /// [`number_of_triangles`](super::number_of_triangles) slots.
    pub fn to_solid(&self) -> Result<RawSolid, ReliefError> {
        let layout = SolidLayout::new(self.nrows(), self.ncols());
        let mut triangles = vec![Triangle::zero(); layout.num_triangles()];
        let mut cursor = TriangleCursor::new(&mut triangles);

        for section in SOLID_SECTIONS {
            generate_section(self, section, &mut cursor)?;
        }

        let written = cursor.finish()?;
        log::debug!(
            "triangulated a {}x{} grid into {} triangles",
            self.nrows(),
            self.ncols(),
            written
        );

        Ok(RawSolid::new(triangles, self.nrows(), self.ncols()))
    }

    /// Triangulates this grid into a closed solid, emitting the sections in parallel.
    ///
    /// Each section is written by its own cursor into the disjoint part of the
    /// buffer given by [`SolidLayout`]. The result is identical to [`Self::to_solid`].
    ///
    /// This function is enabled by the `parallel` feature flag.
    #[cfg(feature = "parallel")]
    pub fn to_solid_par(&self) -> Result<RawSolid, ReliefError> {
        use rayon::prelude::*;

        let layout = SolidLayout::new(self.nrows(), self.ncols());
        let mut triangles = vec![Triangle::zero(); layout.num_triangles()];
        let parts = layout
            .split_mut(&mut triangles)
            .ok_or(ReliefError::BufferSizeMismatch {
                section: SOLID_SECTIONS[0],
                expected: layout.num_triangles(),
                written: 0,
            })?;

        parts
            .into_par_iter()
            .map(|(section, slots)| {
                let mut cursor = TriangleCursor::new(slots);
                generate_section(self, section, &mut cursor)?;
                cursor.finish().map(|_| ())
            })
            .collect::<Result<(), ReliefError>>()?;

        Ok(RawSolid::new(triangles, self.nrows(), self.ncols()))
    }
}

/// Emits one section of the solid.
pub fn generate_section(
    grid: &HeightGrid,
    section: SolidSection,
    cursor: &mut TriangleCursor,
) -> Result<(), ReliefError> {
    cursor.begin_section(section);
    let start = cursor.position();

    match section {
        SolidSection::Surface(handedness) => generate_surface(grid, handedness, cursor)?,
        SolidSection::Wall(wall) => generate_side(grid, wall, cursor)?,
        SolidSection::Base(handedness) => generate_base(grid, handedness, cursor)?,
    }

    log::trace!("{section}: {} triangles", cursor.position() - start);
    Ok(())
}

/// Emits the two triangles of every grid quad, draped over the heights.
///
/// A vertex with quad offset `(k, l)` of the quad `(i, j)` is
/// `(i + k, j + l, grid[i + k, j + l])`.
pub fn generate_surface(
    grid: &HeightGrid,
    handedness: Handedness,
    cursor: &mut TriangleCursor,
) -> Result<(), ReliefError> {
    let template = QuadTemplate::new(handedness);

    for i in 0..grid.nrows() - 1 {
        for j in 0..grid.ncols() - 1 {
            for offsets in template.triangles() {
                let vertices = offsets.map(|[k, l]| {
                    Point::new(
                        (i + k) as Real,
                        (j + l) as Real,
                        grid.height(i + k, j + l),
                    )
                });
                cursor.emit(Triangle::from(vertices))?;
            }
        }
    }

    Ok(())
}

/// Emits a vertical wall between the edge of the surface and `z = 0`.
///
/// The wall profile holds one `[0, height]` pair per border sample: the first
/// component is the bottom edge of the wall, the second one its top edge,
/// shared with the surface.
pub fn generate_side(
    grid: &HeightGrid,
    wall: Wall,
    cursor: &mut TriangleCursor,
) -> Result<(), ReliefError> {
    let template = QuadTemplate::new(wall.handedness);

    let (profile, position): (Vec<[Real; 2]>, usize) = match wall.axis {
        SideAxis::X => {
            let j = wall.border.resolve(grid.ncols());
            let profile = (0..grid.nrows()).map(|i| [0.0, grid.height(i, j)]).collect();
            (profile, j)
        }
        SideAxis::Y => {
            let i = wall.border.resolve(grid.nrows());
            let profile = (0..grid.ncols()).map(|j| [0.0, grid.height(i, j)]).collect();
            (profile, i)
        }
    };
    let position = position as Real;

    for i in 0..profile.len() - 1 {
        for offsets in template.triangles() {
            let vertices = offsets.map(|[k, l]| {
                let along = (i + k) as Real;
                let z = profile[i + k][l];
                match wall.axis {
                    SideAxis::X => Point::new(along, position, z),
                    SideAxis::Y => Point::new(position, along, z),
                }
            });
            cursor.emit(Triangle::from(vertices))?;
        }
    }

    Ok(())
}

/// Emits a wall described by string tokens, as `(dimension, index, handedness)`.
///
/// `dimension` is `"x"` or `"y"`, `index` is `0` or `-1`, and `handedness` is
/// `"r"` or `"l"`. Every token is validated before anything is written.
pub fn generate_side_from_tokens(
    grid: &HeightGrid,
    dimension: &str,
    index: isize,
    handedness: &str,
    cursor: &mut TriangleCursor,
) -> Result<(), ReliefError> {
    let wall = Wall::new(
        dimension.parse::<SideAxis>()?,
        BorderIndex::try_from(index)?,
        handedness.parse::<Handedness>()?,
    );
    generate_section(grid, SolidSection::Wall(wall), cursor)
}

/// Emits the two triangles closing the footprint of the grid at `z = 0`.
pub fn generate_base(
    grid: &HeightGrid,
    handedness: Handedness,
    cursor: &mut TriangleCursor,
) -> Result<(), ReliefError> {
    let template = QuadTemplate::new(handedness);
    let extent_x = (grid.nrows() - 1) as Real;
    let extent_y = (grid.ncols() - 1) as Real;

    for offsets in template.triangles() {
        let vertices =
            offsets.map(|[k, l]| Point::new(k as Real * extent_x, l as Real * extent_y, 0.0));
        cursor.emit(Triangle::from(vertices))?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transformation::number_of_triangles;

    fn ramp(nrows: usize, ncols: usize) -> HeightGrid {
        HeightGrid::from_fn(nrows, ncols, |i, j| 1.0 + (i * ncols + j) as Real).unwrap()
    }

    #[test]
    fn solid_fills_the_exact_triangle_count() {
        for (nrows, ncols) in [(2, 2), (2, 5), (4, 3), (7, 7)] {
            let solid = ramp(nrows, ncols).to_solid().unwrap();
            assert_eq!(solid.len(), number_of_triangles(nrows, ncols));
        }
    }

    #[test]
    fn surface_vertices_follow_the_grid() {
        let grid = ramp(3, 4);
        let solid = grid.to_solid().unwrap();

        // The first quad, emitted with the left-handed template.
        let first = solid.triangles()[0];
        assert_eq!(first.a, Point::new(0.0, 0.0, grid.height(0, 0)));
        assert_eq!(first.b, Point::new(1.0, 0.0, grid.height(1, 0)));
        assert_eq!(first.c, Point::new(0.0, 1.0, grid.height(0, 1)));

        // Quads are visited with `i` outer and `j` inner.
        let second_quad = solid.triangles()[2];
        assert_eq!(second_quad.a, Point::new(0.0, 1.0, grid.height(0, 1)));
    }

    #[test]
    fn surface_normals_point_up_and_base_normals_down() {
        let solid = ramp(4, 5).to_solid().unwrap();
        let surface = 2 * 3 * 4;

        for tri in &solid.triangles()[..surface] {
            assert!(tri.scaled_normal().z > 0.0);
        }
        for tri in &solid.triangles()[solid.len() - 2..] {
            assert!(tri.scaled_normal().z < 0.0);
            assert!(tri.vertices().iter().all(|p| p.z == 0.0));
        }
    }

    #[test]
    fn walls_face_outward() {
        let grid = ramp(3, 4);
        let solid = grid.to_solid().unwrap();
        let layout = SolidLayout::new(3, 4);
        let center = Point::new(1.0, 1.5, 0.0);

        for (section, range) in layout.sections() {
            if let SolidSection::Wall(_) = section {
                for tri in &solid.triangles()[range] {
                    let n = tri.scaled_normal();
                    let outward = tri.a - center;
                    assert!(n.z == 0.0);
                    assert!(n.x * outward.x + n.y * outward.y > 0.0, "{section}");
                }
            }
        }
    }

    #[test]
    fn base_spans_the_footprint() {
        let solid = ramp(3, 6).to_solid().unwrap();
        let aabb = crate::bounding_volume::Aabb::from_triangles(&solid.triangles()[solid.len() - 2..]);

        assert_eq!(aabb.mins, Point::origin());
        assert_eq!(aabb.maxs, Point::new(2.0, 5.0, 0.0));
    }

    #[test]
    fn invalid_tokens_write_nothing() {
        let grid = ramp(3, 3);
        let mut slots = vec![Triangle::zero(); 4];
        let mut cursor = TriangleCursor::new(&mut slots);

        for (dimension, index, handedness) in [("z", 0, "l"), ("x", 0, "u"), ("y", 1, "r")] {
            let result =
                generate_side_from_tokens(&grid, dimension, index, handedness, &mut cursor);
            assert!(matches!(result, Err(ReliefError::InvalidArgument(_))));
            assert_eq!(cursor.position(), 0);
        }

        generate_side_from_tokens(&grid, "x", -1, "r", &mut cursor).unwrap();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.finish().unwrap(), 4);
    }

    #[test]
    fn overflowing_section_is_a_size_mismatch() {
        let grid = ramp(3, 3);
        let mut slots = vec![Triangle::zero(); 5];
        let mut cursor = TriangleCursor::new(&mut slots);

        let err = generate_section(&grid, SOLID_SECTIONS[0], &mut cursor).unwrap_err();
        assert!(matches!(
            err,
            ReliefError::BufferSizeMismatch {
                section: SolidSection::Surface(Handedness::Left),
                expected: 5,
                written: 6,
            }
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_and_serial_solids_are_identical() {
        let grid = ramp(9, 13);
        assert_eq!(
            grid.to_solid().unwrap().triangles(),
            grid.to_solid_par().unwrap().triangles()
        );
    }
}
