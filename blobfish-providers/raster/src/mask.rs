//! Colour-distance thresholding of decoded images into binary masks.

use blobfish_core::{MaskColor, MaskSource, MaskSourceError};
use image::RgbImage;

use crate::color::Rgb;

/// A thresholded image: every pixel within `tolerance` of the target colour
/// is foreground, everything else background.
///
/// # Examples
/// ```
/// use blobfish_core::{MaskColor, MaskSource};
/// use blobfish_providers_raster::{RasterMask, Rgb};
/// use image::RgbImage;
///
/// let mut img = RgbImage::new(2, 1);
/// img.put_pixel(0, 0, image::Rgb([250, 0, 0]));
/// img.put_pixel(1, 0, image::Rgb([0, 0, 250]));
/// let mask = RasterMask::from_image("demo", &img, Rgb::new(255, 0, 0), 5);
/// assert_eq!(mask.color_at(0, 0)?, MaskColor::Foreground);
/// assert_eq!(mask.color_at(1, 0)?, MaskColor::Background);
/// # Ok::<(), blobfish_core::MaskSourceError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RasterMask {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl RasterMask {
    /// Thresholds `image` against `target` with the given percentual
    /// `tolerance` (inclusive).
    #[must_use]
    pub fn from_image(
        name: impl Into<String>,
        image: &RgbImage,
        target: Rgb,
        tolerance: u32,
    ) -> Self {
        let (width, height) = image.dimensions();
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                let image::Rgb([r, g, b]) = *image.get_pixel(x, y);
                cells.push(target.distance(Rgb::new(r, g, b)) <= tolerance);
            }
        }
        Self {
            name: name.into(),
            width: width as usize,
            height: height as usize,
            cells,
        }
    }

    /// Returns how many pixels passed the threshold.
    #[must_use]
    pub fn foreground_len(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl MaskSource for RasterMask {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color_at(&self, x: usize, y: usize) -> Result<MaskColor, MaskSourceError> {
        if x >= self.width || y >= self.height {
            return Err(MaskSourceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(if self.cells[y * self.width + x] {
            MaskColor::Foreground
        } else {
            MaskColor::Background
        })
    }
}
