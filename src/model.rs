//! End-to-end generation of a relief solid from a heightmap file.

use crate::shape::HeightGrid;
use crate::transformation::{
    write_stl_file, CylindricalRescale, ReliefError, ReliefMesh, ReliefParameters, StlFormat,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The extension of the files written by [`ReliefModel::save`] by default.
pub const OUTPUT_EXTENSION: &str = "stl";

/// A heightmap file together with the parameters used to turn it into a solid.
///
/// Each stage (`load`, `generate`, `save`) is timed and reported at the `info`
/// log level.
#[derive(Clone, Debug, PartialEq)]
pub struct ReliefModel {
    path: PathBuf,
    parameters: ReliefParameters,
}

impl ReliefModel {
    /// Creates a model for the heightmap at `path`.
    ///
    /// Nothing is read until [`ReliefModel::load`] or [`ReliefModel::generate`] is called.
    pub fn new(path: impl Into<PathBuf>, parameters: ReliefParameters) -> Self {
        Self {
            path: path.into(),
            parameters,
        }
    }

    /// The path of the source heightmap.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The generation parameters.
    pub fn parameters(&self) -> &ReliefParameters {
        &self.parameters
    }

    /// Decodes the heightmap and reduces its resolution by the configured factor.
    #[cfg(feature = "image")]
    pub fn load(&self) -> Result<HeightGrid, ReliefError> {
        self.parameters.validate()?;

        timed("loading the heightmap", || {
            let grid = HeightGrid::from_image_file(&self.path)?;
            Ok(grid.downsampled(self.parameters.resolution_factor)?)
        })
    }

    /// Loads the heightmap, then triangulates and rescales it.
    #[cfg(feature = "image")]
    pub fn generate(&self) -> Result<ReliefMesh, ReliefError> {
        let grid = self.load()?;
        self.generate_from_grid(&grid)
    }

    /// Triangulates and rescales an already loaded grid with the parameters of this model.
    pub fn generate_from_grid(&self, grid: &HeightGrid) -> Result<ReliefMesh, ReliefError> {
        self.parameters.validate()?;
        let rescale = CylindricalRescale::from(&self.parameters);

        #[cfg(feature = "parallel")]
        let triangulate = || grid.to_solid_par();
        #[cfg(not(feature = "parallel"))]
        let triangulate = || grid.to_solid();

        let stage = format!(
            "triangulating the {}x{} grid from {}",
            grid.nrows(),
            grid.ncols(),
            self.path.display()
        );
        let solid = timed(&stage, triangulate)?;

        timed("rescaling the solid", || solid.rescale(&rescale))
    }

    /// The path written by [`ReliefModel::save`] when no output path is given:
    /// the source path with its extension replaced by `stl`.
    pub fn default_output_path(&self) -> PathBuf {
        self.path.with_extension(OUTPUT_EXTENSION)
    }

    /// Writes `mesh` as an STL file and returns the path written.
    pub fn save(
        &self,
        mesh: &ReliefMesh,
        output: Option<&Path>,
        format: StlFormat,
    ) -> Result<PathBuf, ReliefError> {
        let output = output.map_or_else(|| self.default_output_path(), Path::to_path_buf);
        let name = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        timed("saving the mesh", || {
            write_stl_file(&output, mesh.triangles(), format, &name)
        })?;
        log::debug!("{} triangles written to {}", mesh.len(), output.display());

        Ok(output)
    }
}

/// Runs one pipeline stage, logging its duration on success and the error,
/// once, on failure.
fn timed<T>(
    announce: &str,
    f: impl FnOnce() -> Result<T, ReliefError>,
) -> Result<T, ReliefError> {
    let t0 = Instant::now();
    let result = f();

    match &result {
        Ok(_) => log::info!("{announce}: {:.4}s", t0.elapsed().as_secs_f64()),
        Err(err) => log::error!("{announce} failed: {err}"),
    }

    result
}
