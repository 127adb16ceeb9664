use super::{CylindricalRescale, ReliefError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;
use hashbrown::hash_map::{Entry, HashMap};

/// A completely triangulated solid, still in grid units.
///
/// Obtained from [`HeightGrid::to_solid`](crate::shape::HeightGrid::to_solid).
/// Every slot of its triangle buffer was written exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSolid {
    triangles: Vec<Triangle>,
    nrows: usize,
    ncols: usize,
}

impl RawSolid {
    pub(crate) fn new(triangles: Vec<Triangle>, nrows: usize, ncols: usize) -> Self {
        Self {
            triangles,
            nrows,
            ncols,
        }
    }

    /// The triangles of this solid, in emission order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The number of triangles of this solid.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Is this solid empty? This never happens for a solid built from a grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The dimensions `(nrows, ncols)` of the grid this solid was built from.
    #[inline]
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The bounding box of this solid.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_triangles(&self.triangles)
    }

    /// The signed volume enclosed by this solid.
    ///
    /// Positive when every face is oriented outward.
    pub fn signed_volume(&self) -> Real {
        signed_volume(&self.triangles)
    }

    /// Maps this solid into physical units, consuming it.
    ///
    /// On failure the solid is dropped: there is no partially rescaled output.
    pub fn rescale(mut self, rescale: &CylindricalRescale) -> Result<ReliefMesh, ReliefError> {
        rescale.apply(&mut self.triangles, (self.nrows, self.ncols))?;
        Ok(ReliefMesh {
            triangles: self.triangles,
        })
    }
}

/// The final, rescaled triangle list of a relief.
///
/// This is the only type handed to the mesh writers by
/// [`ReliefModel`](crate::model::ReliefModel).
#[derive(Clone, Debug, PartialEq)]
pub struct ReliefMesh {
    triangles: Vec<Triangle>,
}

impl ReliefMesh {
    /// The triangles of this mesh, in emission order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Moves the triangles out of this mesh.
    #[inline]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Is this mesh empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The bounding box of this mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_triangles(&self.triangles)
    }

    /// The signed volume enclosed by this mesh.
    pub fn signed_volume(&self) -> Real {
        signed_volume(&self.triangles)
    }

    /// The total area of the faces of this mesh.
    pub fn area(&self) -> Real {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Converts this triangle soup into an indexed mesh, merging identical vertices.
    ///
    /// Vertices are compared exactly (bitwise). The triangle order and the vertex
    /// order of each triangle are preserved.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::with_capacity(self.triangles.len());
        let mut vertex_ids = HashMap::new();

        for tri in &self.triangles {
            let idx = tri.vertices().map(|pt| {
                let key = pt.coords.map(Real::to_bits);
                match vertex_ids.entry([key.x, key.y, key.z]) {
                    Entry::Occupied(e) => *e.get(),
                    Entry::Vacant(e) => {
                        vertices.push(pt);
                        *e.insert(vertices.len() as u32 - 1)
                    }
                }
            });
            indices.push(idx);
        }

        (vertices, indices)
    }
}

fn signed_volume(triangles: &[Triangle]) -> Real {
    triangles.iter().map(Triangle::signed_volume_wrt_origin).sum()
}
