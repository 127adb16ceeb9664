//! Export of relief meshes to Wavefront OBJ.

use crate::transformation::{ReliefError, ReliefMesh};
use obj::{Group, IndexTuple, ObjData, Object, SimplePolygon};
use std::path::Path;

impl ReliefMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Identical vertices are merged, see [`ReliefMesh::to_trimesh`].
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path, name: &str) -> Result<(), ReliefError> {
        let (vertices, indices) = self.to_trimesh();
        let mut file = std::fs::File::create(path)?;

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: vertices
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: indices
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: name.to_string(),
                    index: 0,
                    material: None,
                }],
                name: name.to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)?;

        log::debug!(
            "wrote {} vertices and {} faces to {}",
            vertices.len(),
            indices.len(),
            path.display()
        );
        Ok(())
    }
}
