//! Error types for the raster provider.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing raster images.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Decoding the input image failed.
    #[error("failed to read image `{path}`: {source}")]
    Read {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// Encoding the output image failed.
    #[error("failed to write image `{path}`: {source}")]
    Write {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },
}
