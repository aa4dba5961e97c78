//! Blobfish core library.
//!
//! Finds connected regions ("blobs") of the foreground colour in a two-valued
//! raster mask and reports the k largest. One forward raster pass merges
//! same-coloured left/above neighbours in an array-backed disjoint-set forest
//! whose sets own intrusive, O(1)-mergeable pixel groups; a size-ranked
//! extraction then yields the top-k foreground components.

mod builder;
mod detector;
mod error;
mod forest;
mod grid;
mod group;
mod label;
mod result;
mod select;
mod source;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::DetectorBuilder,
    detector::Detector,
    error::{
        DetectorError, DetectorErrorCode, ForestError, ForestErrorCode, MaskSourceError,
        MaskSourceErrorCode, Result,
    },
    forest::DisjointForest,
    grid::{GridDims, PixelCoord},
    group::{GroupArena, GroupMembers},
    label::{ComponentMap, label_mask},
    result::{Blob, Detection},
    select::{BlobCandidate, rank_blobs},
    source::{MaskColor, MaskSource},
};
