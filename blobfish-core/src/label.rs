//! Single-pass connected-component labeling over a mask source.
//!
//! The pass visits pixels in ascending row-major id order and unions each
//! pixel with its left and above neighbours when their symbolic colours
//! match, which yields 4-connectivity once the whole pass completes.
//! Foreground and background runs are merged alike; the selector filters to
//! foreground afterwards.

use std::sync::Arc;

use crate::{
    error::{DetectorError, ForestError, MaskSourceError, Result},
    forest::DisjointForest,
    grid::{GridDims, PixelCoord},
    group::{GroupArena, GroupMembers},
    source::{MaskColor, MaskSource},
};

/// Labeled components of one mask: a forest of pixel ids plus the pixel
/// group owned by each set.
///
/// Groups are keyed by the *current* root: every union transfers the losing
/// group's chain into the winner before the map hands out any data, and the
/// accessors resolve roots internally, so a stale root id can never observe
/// a retired group.
#[derive(Clone, Debug)]
pub struct ComponentMap {
    dims: GridDims,
    forest: DisjointForest,
    groups: GroupArena,
}

impl ComponentMap {
    fn with_singletons(dims: GridDims) -> Self {
        let len = dims.len();
        let mut groups = GroupArena::new(len);
        for id in 0..len {
            if let Some(coord) = dims.coord_of(id) {
                groups.push(id, coord);
            }
        }
        Self {
            dims,
            forest: DisjointForest::new(len),
            groups,
        }
    }

    /// Returns the dimensions of the labeled mask.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the number of pixel ids in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Returns whether the map covers a zero-area mask.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Resolves the current root of the component containing `id`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is outside the mask.
    pub fn find(&mut self, id: usize) -> core::result::Result<usize, ForestError> {
        self.forest.find(id)
    }

    /// Returns the size of the component containing `id`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is outside the mask.
    pub fn component_size(&mut self, id: usize) -> core::result::Result<usize, ForestError> {
        let root = self.forest.find(id)?;
        self.forest.root_size(root)
    }

    /// Iterates the pixels of the component containing `id` in the order
    /// they were appended during labeling.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is outside the mask.
    pub fn members(&mut self, id: usize) -> core::result::Result<GroupMembers<'_>, ForestError> {
        let root = self.forest.find(id)?;
        Ok(self.groups.members(root))
    }

    /// Unions two components given their current roots, splicing the losing
    /// group into the winner in the same step.
    fn union(&mut self, a_root: usize, b_root: usize) -> core::result::Result<usize, ForestError> {
        let winner = self.forest.union(a_root, b_root)?;
        let loser = if winner == a_root { b_root } else { a_root };
        self.groups.merge(winner, loser);
        Ok(winner)
    }
}

fn read_color<S: MaskSource + ?Sized>(
    source: &S,
    coord: PixelCoord,
) -> core::result::Result<MaskColor, MaskSourceError> {
    source.color_at(coord.x, coord.y)
}

fn wrap_mask_error<S: MaskSource + ?Sized>(source: &S, error: MaskSourceError) -> DetectorError {
    DetectorError::Mask {
        mask: Arc::from(source.name()),
        error,
    }
}

/// Labels `source` into a [`ComponentMap`] with one forward raster pass.
///
/// Two pixels end up in the same component exactly when they are connected
/// through a chain of left/above adjacent same-coloured pixels. A zero-area
/// source yields an empty map.
///
/// # Errors
/// Returns [`DetectorError::Mask`] when the source fails an accessor call
/// and [`DetectorError::Forest`] when a forest contract is violated.
///
/// # Examples
/// ```
/// use blobfish_core::{MaskColor, MaskSource, MaskSourceError, label_mask};
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
/// let mut map = label_mask(&Solid)?;
/// assert_eq!(map.component_size(0)?, 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn label_mask<S: MaskSource + ?Sized>(source: &S) -> Result<ComponentMap> {
    let dims = GridDims::new(source.width(), source.height());
    let mut map = ComponentMap::with_singletons(dims);

    let mut id = 0_usize;
    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let coord = PixelCoord::new(x, y);
            let color =
                read_color(source, coord).map_err(|error| wrap_mask_error(source, error))?;

            if x > 0 {
                let left = PixelCoord::new(x - 1, y);
                let left_color =
                    read_color(source, left).map_err(|error| wrap_mask_error(source, error))?;
                if left_color == color {
                    let left_root = map.find(id - 1)?;
                    let current_root = map.find(id)?;
                    map.union(current_root, left_root)?;
                }
            }

            if y > 0 {
                let above = PixelCoord::new(x, y - 1);
                let above_color =
                    read_color(source, above).map_err(|error| wrap_mask_error(source, error))?;
                if above_color == color {
                    let above_root = map.find(id - dims.width())?;
                    // The left union may have moved this pixel's root.
                    let current_root = map.find(id)?;
                    map.union(current_root, above_root)?;
                }
            }

            id += 1;
        }
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::BitmapMask;
    use rstest::rstest;
    use std::collections::HashSet;

    fn partition(map: &mut ComponentMap) -> Vec<usize> {
        (0..map.len())
            .map(|id| map.find(id).expect("in range"))
            .collect()
    }

    #[test]
    fn empty_mask_yields_an_empty_map() {
        let mut map = label_mask(&BitmapMask::empty("empty")).expect("labeling succeeds");
        assert!(map.is_empty());
        assert!(map.find(0).is_err());
    }

    #[test]
    fn single_pixel_is_its_own_component() {
        let mut map = label_mask(&BitmapMask::from_rows("dot", &["#"])).expect("labeling succeeds");
        assert_eq!(map.component_size(0).expect("in range"), 1);
        let members: Vec<_> = map.members(0).expect("in range").collect();
        assert_eq!(members, [PixelCoord::new(0, 0)]);
    }

    #[test]
    fn solid_mask_collapses_to_one_component() {
        let mask = BitmapMask::from_rows("solid", &["##", "##"]);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        let roots: HashSet<_> = partition(&mut map).into_iter().collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(map.component_size(3).expect("in range"), 4);
    }

    #[test]
    fn foreground_and_background_merge_separately() {
        let mask = BitmapMask::from_rows("split", &["##..", "##.."]);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        assert_eq!(map.component_size(0).expect("in range"), 4);
        assert_eq!(map.component_size(2).expect("in range"), 4);
        assert_ne!(
            map.find(0).expect("in range"),
            map.find(2).expect("in range"),
        );
    }

    #[test]
    fn diagonal_pixels_stay_separate() {
        let mask = BitmapMask::from_rows("diagonal", &["#.", ".#"]);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        assert_ne!(
            map.find(0).expect("in range"),
            map.find(3).expect("in range"),
        );
        assert_eq!(map.component_size(0).expect("in range"), 1);
        assert_eq!(map.component_size(3).expect("in range"), 1);
    }

    #[rstest]
    #[case(&["###.#", "#.#.#", "#.###"])]
    #[case(&["#.#", ".#.", "#.#"])]
    #[case(&["####", "....", "####"])]
    fn u_shapes_and_stripes_connect_exactly_the_reachable_pixels(#[case] rows: &[&str]) {
        let mask = BitmapMask::from_rows("shape", rows);
        let mut map = label_mask(&mask).expect("labeling succeeds");

        // Oracle: flood fill with 4-connectivity over the same mask.
        let width = rows[0].len();
        let height = rows.len();
        let cells: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.chars().map(|cell| cell == '#'))
            .collect();
        let mut oracle = vec![usize::MAX; cells.len()];
        let mut next_label = 0;
        for start in 0..cells.len() {
            if oracle[start] != usize::MAX {
                continue;
            }
            let mut stack = vec![start];
            oracle[start] = next_label;
            while let Some(id) = stack.pop() {
                let (x, y) = (id % width, id / width);
                let mut neighbors = Vec::new();
                if x > 0 {
                    neighbors.push(id - 1);
                }
                if x + 1 < width {
                    neighbors.push(id + 1);
                }
                if y > 0 {
                    neighbors.push(id - width);
                }
                if y + 1 < height {
                    neighbors.push(id + width);
                }
                for n in neighbors {
                    if oracle[n] == usize::MAX && cells[n] == cells[id] {
                        oracle[n] = next_label;
                        stack.push(n);
                    }
                }
            }
            next_label += 1;
        }

        for a in 0..cells.len() {
            for b in 0..cells.len() {
                let same_component =
                    map.find(a).expect("in range") == map.find(b).expect("in range");
                assert_eq!(
                    same_component,
                    oracle[a] == oracle[b],
                    "ids {a} and {b} disagree with the flood-fill oracle",
                );
            }
        }
    }

    #[test]
    fn component_groups_carry_every_member_exactly_once() {
        let mask = BitmapMask::from_rows("ring", &["###", "#.#", "###"]);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        let members: Vec<_> = map.members(0).expect("in range").collect();
        assert_eq!(members.len(), 8);
        let unique: HashSet<_> = members.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&PixelCoord::new(1, 1)));
    }

    #[test]
    fn stale_roots_cannot_observe_retired_groups() {
        let mask = BitmapMask::from_rows("bar", &["##"]);
        let mut map = label_mask(&mask).expect("labeling succeeds");
        // Whichever slot lost the union, reading through it must resolve to
        // the full component.
        for id in 0..2 {
            assert_eq!(map.members(id).expect("in range").count(), 2);
        }
    }
}
