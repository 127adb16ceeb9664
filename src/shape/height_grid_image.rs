use crate::math::{DMatrix, Real};
use crate::shape::HeightGrid;
use crate::transformation::ReliefError;
use image::{ColorType, DynamicImage, GenericImageView};
use std::path::Path;

impl HeightGrid {
    /// Decodes the image at `path` into a grid of raw luminance values.
    ///
    /// Image rows become the first grid index and image columns the second one.
    /// Heights are not normalized: 8-bit images give values in `0..=255`, 16-bit
    /// images values in `0..=65535` and floating-point images their luminance.
    ///
    /// This function is enabled by the `image` feature flag.
    pub fn from_image_file(path: impl AsRef<Path>) -> Result<Self, ReliefError> {
        let path = path.as_ref();
        let img = image::open(path)?;
        log::debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        Self::from_image(&img)
    }

    /// Converts an already decoded image into a grid of raw luminance values.
    ///
    /// See [`HeightGrid::from_image_file`] for the layout and value range.
    pub fn from_image(img: &DynamicImage) -> Result<Self, ReliefError> {
        let (width, height) = img.dimensions();
        let (nrows, ncols) = (height as usize, width as usize);

        #[allow(clippy::unnecessary_cast)]
        let heights = match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                let luma = img.to_luma8();
                DMatrix::from_fn(nrows, ncols, |i, j| {
                    luma.get_pixel(j as u32, i as u32).0[0] as Real
                })
            }
            ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
                let luma = img.to_luma16();
                DMatrix::from_fn(nrows, ncols, |i, j| {
                    luma.get_pixel(j as u32, i as u32).0[0] as Real
                })
            }
            _ => {
                let luma = img.to_luma32f();
                DMatrix::from_fn(nrows, ncols, |i, j| {
                    luma.get_pixel(j as u32, i as u32).0[0] as Real
                })
            }
        };

        Self::new(heights).map_err(Into::into)
    }
}
