//! Size-ranked extraction of foreground components.
//!
//! Candidates are collected by scanning ids in ascending order, so the first
//! id that resolves to a given root is that component's minimal pixel id.
//! Ranking sorts by size descending and breaks ties on that minimal id,
//! ascending, which keeps equal-sized blobs distinct and deterministically
//! ordered.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    error::{DetectorError, Result},
    label::ComponentMap,
    source::MaskSource,
};

/// A ranked foreground component, identified by its root at ranking time.
///
/// Root ids are invalidated by later unions; the detector extracts member
/// coordinates immediately, before the map is mutated again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlobCandidate {
    root: usize,
    size: usize,
    min_pixel_id: usize,
}

impl BlobCandidate {
    /// Returns the component's root id at ranking time.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the number of pixels in the component.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the smallest row-major pixel id in the component.
    #[must_use]
    pub fn min_pixel_id(&self) -> usize {
        self.min_pixel_id
    }
}

/// Collects the foreground components of `map` and returns up to
/// `blob_count` of them, largest first.
///
/// Fewer than `blob_count` distinct foreground blobs is not an error; the
/// available blobs are returned. Equal sizes rank by minimal pixel id.
///
/// # Errors
/// Returns [`DetectorError::Mask`] when `source` fails an accessor call and
/// [`DetectorError::Forest`] when a forest contract is violated.
pub fn rank_blobs<S: MaskSource + ?Sized>(
    map: &mut ComponentMap,
    source: &S,
    blob_count: NonZeroUsize,
) -> Result<Vec<BlobCandidate>> {
    let dims = map.dims();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    let mut id = 0_usize;
    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let color = source
                .color_at(x, y)
                .map_err(|error| DetectorError::Mask {
                    mask: Arc::from(source.name()),
                    error,
                })?;
            if color.is_foreground() {
                let root = map.find(id)?;
                if seen.insert(root) {
                    candidates.push(BlobCandidate {
                        root,
                        size: map.component_size(root)?,
                        min_pixel_id: id,
                    });
                }
            }
            id += 1;
        }
    }

    candidates.sort_by(|a, b| {
        b.size
            .cmp(&a.size)
            .then_with(|| a.min_pixel_id.cmp(&b.min_pixel_id))
    });
    candidates.truncate(blob_count.get());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::label_mask;
    use crate::test_utils::BitmapMask;

    fn ranked(rows: &[&str], blob_count: usize) -> Vec<BlobCandidate> {
        let mask = BitmapMask::from_rows("mask", rows);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        rank_blobs(
            &mut map,
            &mask,
            NonZeroUsize::new(blob_count).expect("non-zero"),
        )
        .expect("ranking succeeds")
    }

    #[test]
    fn blobs_rank_largest_first() {
        let candidates = ranked(&["###..#", "###..#", "......", "##...."], 10);
        let sizes: Vec<_> = candidates.iter().map(BlobCandidate::size).collect();
        assert_eq!(sizes, [6, 2, 2]);
    }

    #[test]
    fn equal_sizes_rank_by_first_pixel() {
        let candidates = ranked(&["#.#"], 2);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].size(), 1);
        assert_eq!(candidates[1].size(), 1);
        assert_eq!(candidates[0].min_pixel_id(), 0);
        assert_eq!(candidates[1].min_pixel_id(), 2);
    }

    #[test]
    fn background_components_are_never_candidates() {
        let candidates = ranked(&["..#", "..#"], 10);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].size(), 2);
    }

    #[test]
    fn requesting_more_blobs_than_exist_returns_what_exists() {
        let candidates = ranked(&["#"], 5);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn blob_count_truncates_the_ranking() {
        let candidates = ranked(&["#.##.###"], 2);
        let sizes: Vec<_> = candidates.iter().map(BlobCandidate::size).collect();
        assert_eq!(sizes, [3, 2]);
    }

    #[test]
    fn min_pixel_id_is_the_smallest_member_id() {
        // The lone foreground region starts mid-row; its first scanned pixel
        // must be recorded even after unions reshuffle roots.
        let candidates = ranked(&["..##", ".###"], 1);
        assert_eq!(candidates[0].min_pixel_id(), 2);
        assert_eq!(candidates[0].size(), 5);
    }
}
