//! Detection orchestration for the blobfish core library.
//!
//! Provides the [`Detector`] runtime entry point: label the mask, rank the
//! foreground components, and extract the top-k blobs as owned results.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    grid::GridDims,
    label::label_mask,
    result::{Blob, Detection},
    select::rank_blobs,
    source::MaskSource,
};

/// Entry point for running blob detection over a [`MaskSource`].
///
/// # Examples
/// ```
/// use blobfish_core::{DetectorBuilder, MaskColor, MaskSource, MaskSourceError};
///
/// struct Solid;
///
/// impl MaskSource for Solid {
///     fn width(&self) -> usize { 2 }
///     fn height(&self) -> usize { 2 }
///     fn name(&self) -> &str { "solid" }
///     fn color_at(&self, x: usize, y: usize) -> Result<MaskColor, MaskSourceError> {
///         if x >= 2 || y >= 2 {
///             return Err(MaskSourceError::OutOfBounds { x, y, width: 2, height: 2 });
///         }
///         Ok(MaskColor::Foreground)
///     }
/// }
///
/// let detector = DetectorBuilder::new().build().expect("builder must succeed");
/// let detection = detector.run(&Solid).expect("run must succeed");
/// assert_eq!(detection.blob_count(), 1);
/// assert_eq!(detection.blobs()[0].size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    blob_count: NonZeroUsize,
}

impl Detector {
    pub(crate) fn new(blob_count: NonZeroUsize) -> Self {
        Self { blob_count }
    }

    /// Returns how many blobs a run reports at most.
    ///
    /// # Examples
    /// ```
    /// use blobfish_core::DetectorBuilder;
    ///
    /// let detector = DetectorBuilder::new()
    ///     .with_blob_count(4)
    ///     .build()
    ///     .expect("builder must accept non-zero blob counts");
    /// assert_eq!(detector.blob_count().get(), 4);
    /// ```
    #[must_use]
    pub fn blob_count(&self) -> NonZeroUsize {
        self.blob_count
    }

    /// Labels `source` and returns up to `blob_count` foreground blobs,
    /// largest first.
    ///
    /// A zero-area source yields an empty detection; fewer foreground blobs
    /// than requested yields what exists. Both are success cases.
    ///
    /// # Errors
    /// Returns [`crate::DetectorError::Mask`] when the source fails an
    /// accessor call and [`crate::DetectorError::Forest`] when a forest
    /// contract is violated.
    pub fn run<S: MaskSource>(&self, source: &S) -> Result<Detection> {
        let pixels = source.len();
        self.run_with_len(source, pixels)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            mask = %source.name(),
            pixels = pixels,
            blob_count = %self.blob_count,
        ),
    )]
    fn run_with_len<S: MaskSource>(&self, source: &S, pixels: usize) -> Result<Detection> {
        let dims = GridDims::new(source.width(), source.height());
        if pixels == 0 {
            info!(mask = source.name(), "mask is empty, returning no blobs");
            return Ok(Detection::new(dims, Vec::new()));
        }

        let mut map = label_mask(source)?;
        let candidates = rank_blobs(&mut map, source, self.blob_count)?;

        let mut blobs = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let coords = map.members(candidate.root())?.collect();
            blobs.push(Blob::new(coords));
        }

        info!(blobs = blobs.len(), "detection completed");
        Ok(Detection::new(dims, blobs))
    }
}
