//! Recolouring detected blobs and moving images through the filesystem.

use std::path::Path;

use blobfish_core::Detection;
use image::RgbImage;

use crate::{color::Rgb, errors::RasterError, palette::blob_color};

/// Decodes the image at `path` into RGB pixels.
///
/// # Errors
/// Returns [`RasterError::Read`] when the file cannot be opened or decoded.
pub fn load_rgb(path: &Path) -> Result<RgbImage, RasterError> {
    let decoded = image::open(path).map_err(|source| RasterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// Encodes `image` to `path`, with the format chosen from the extension.
///
/// # Errors
/// Returns [`RasterError::Write`] when encoding or writing fails.
pub fn save_rgb(path: &Path, image: &RgbImage) -> Result<(), RasterError> {
    image.save(path).map_err(|source| RasterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Paints the detected blobs onto a copy of `image`, largest blob first.
///
/// Blob `rank` receives `blob_color(target, rank, …)`; pixels outside the
/// detected blobs keep their original colour.
///
/// # Examples
/// ```
/// use blobfish_core::{Blob, Detection, GridDims, PixelCoord};
/// use blobfish_providers_raster::{Rgb, recolor};
/// use image::RgbImage;
///
/// let img = RgbImage::new(2, 1);
/// let detection = Detection::new(
///     GridDims::new(2, 1),
///     vec![Blob::new(vec![PixelCoord::new(0, 0)])],
/// );
/// let painted = recolor(&img, &detection, Rgb::new(50, 50, 220));
/// assert_eq!(painted.get_pixel(0, 0).0, [50, 50, 220]);
/// assert_eq!(painted.get_pixel(1, 0).0, [0, 0, 0]);
/// ```
#[must_use]
pub fn recolor(image: &RgbImage, detection: &Detection, target: Rgb) -> RgbImage {
    let mut painted = image.clone();
    let count = detection.blob_count();
    for (rank, blob) in detection.blobs().iter().enumerate() {
        let color = blob_color(target, rank, count);
        for coord in blob.pixels() {
            if coord.x < painted.width() as usize && coord.y < painted.height() as usize {
                painted.put_pixel(coord.x as u32, coord.y as u32, image::Rgb([
                    color.r, color.g, color.b,
                ]));
            }
        }
    }
    painted
}
