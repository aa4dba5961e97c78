//! Result types for blob detection runs.

use crate::grid::{GridDims, PixelCoord};

/// One detected blob: the member pixels of a foreground component.
///
/// # Examples
/// ```
/// use blobfish_core::{Blob, PixelCoord};
///
/// let blob = Blob::new(vec![PixelCoord::new(0, 0), PixelCoord::new(1, 0)]);
/// assert_eq!(blob.size(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Blob {
    pixels: Vec<PixelCoord>,
}

impl Blob {
    /// Builds a blob from its member coordinates.
    #[must_use]
    pub fn new(pixels: Vec<PixelCoord>) -> Self {
        Self { pixels }
    }

    /// Returns the number of pixels in the blob.
    #[must_use]
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the member coordinates in labeling order.
    #[must_use]
    pub fn pixels(&self) -> &[PixelCoord] {
        &self.pixels
    }
}

/// Represents the output of a [`crate::Detector::run`] invocation.
///
/// Blobs are ordered largest first; equal sizes are ordered by their
/// smallest row-major pixel id.
///
/// # Examples
/// ```
/// use blobfish_core::{Blob, Detection, GridDims, PixelCoord};
///
/// let detection = Detection::new(
///     GridDims::new(2, 1),
///     vec![Blob::new(vec![PixelCoord::new(0, 0)])],
/// );
/// assert_eq!(detection.blob_count(), 1);
/// assert_eq!(detection.dims().len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Detection {
    dims: GridDims,
    blobs: Vec<Blob>,
}

impl Detection {
    /// Builds a detection result from ranked blobs.
    #[must_use]
    pub fn new(dims: GridDims, blobs: Vec<Blob>) -> Self {
        debug_assert!(blobs.windows(2).all(|pair| pair[0].size() >= pair[1].size()));
        Self { dims, blobs }
    }

    /// Returns the dimensions of the mask the detection ran over.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the detected blobs, largest first.
    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Returns how many blobs were detected.
    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }
}
