//! Builder utilities for configuring blob detection.

use std::num::NonZeroUsize;

use crate::{Result, detector::Detector, error::DetectorError};

/// Configures and constructs [`Detector`] instances.
///
/// # Examples
/// ```
/// use blobfish_core::DetectorBuilder;
///
/// let detector = DetectorBuilder::new()
///     .with_blob_count(3)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(detector.blob_count().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    blob_count: usize,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self { blob_count: 1 }
    }
}

impl DetectorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use blobfish_core::DetectorBuilder;
    ///
    /// let builder = DetectorBuilder::new();
    /// assert_eq!(builder.blob_count(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many blobs a run reports, largest first.
    ///
    /// # Examples
    /// ```
    /// use blobfish_core::DetectorBuilder;
    ///
    /// let builder = DetectorBuilder::new().with_blob_count(5);
    /// assert_eq!(builder.blob_count(), 5);
    /// ```
    #[must_use]
    pub fn with_blob_count(mut self, blob_count: usize) -> Self {
        self.blob_count = blob_count;
        self
    }

    /// Returns the configured blob count.
    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.blob_count
    }

    /// Validates the configuration and constructs a [`Detector`] instance.
    ///
    /// # Errors
    /// Returns [`DetectorError::InvalidBlobCount`] when the blob count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use blobfish_core::{DetectorBuilder, DetectorError};
    ///
    /// let err = DetectorBuilder::new()
    ///     .with_blob_count(0)
    ///     .build()
    ///     .expect_err("zero blobs is rejected");
    /// assert_eq!(err, DetectorError::InvalidBlobCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<Detector> {
        let blob_count = NonZeroUsize::new(self.blob_count).ok_or(
            DetectorError::InvalidBlobCount {
                got: self.blob_count,
            },
        )?;

        Ok(Detector::new(blob_count))
    }
}
