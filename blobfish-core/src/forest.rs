//! Array-backed disjoint-set forest with union by size and path compression.
//!
//! Slots are dense element ids `0..len`. Each slot is either a root carrying
//! its tree size or a child carrying its parent id. `union` requires both
//! arguments to already be roots so the caller stays in control of when
//! `find` runs; passing a child is a contract violation, not an input error.

use crate::error::ForestError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Root { size: usize },
    Child { parent: usize },
}

/// Array-backed union-find over dense element ids.
///
/// # Examples
/// ```
/// use blobfish_core::DisjointForest;
///
/// let mut forest = DisjointForest::new(4);
/// let root = forest.union(0, 1)?;
/// assert_eq!(forest.find(1)?, root);
/// assert_eq!(forest.root_size(root)?, 2);
/// # Ok::<(), blobfish_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointForest {
    slots: Vec<Slot>,
}

impl DisjointForest {
    /// Creates a forest of `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::Root { size: 1 }; len],
        }
    }

    /// Returns the number of slots in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the forest has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, id: usize) -> Result<Slot, ForestError> {
        self.slots.get(id).copied().ok_or(ForestError::OutOfRange {
            index: id,
            len: self.slots.len(),
        })
    }

    /// Returns whether `id` is currently the representative of its set.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is outside `[0, len)`.
    pub fn is_root(&self, id: usize) -> Result<bool, ForestError> {
        Ok(matches!(self.slot(id)?, Slot::Root { .. }))
    }

    /// Returns the size of the tree rooted at `root`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `root` is outside `[0, len)`
    /// and [`ForestError::NotARoot`] when it is a child slot.
    pub fn root_size(&self, root: usize) -> Result<usize, ForestError> {
        match self.slot(root)? {
            Slot::Root { size } => Ok(size),
            Slot::Child { .. } => Err(ForestError::NotARoot { id: root }),
        }
    }

    /// Finds the representative of the set containing `id`.
    ///
    /// Applies full path compression: every slot visited on the way to the
    /// root is repointed directly at the root. The walk is iterative (find
    /// the root, then re-walk rewriting parents) so deep trees cannot
    /// overflow the stack.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is outside `[0, len)`.
    pub fn find(&mut self, id: usize) -> Result<usize, ForestError> {
        let mut root = id;
        while let Slot::Child { parent } = self.slot(root)? {
            root = parent;
        }

        let mut cursor = id;
        while let Slot::Child { parent } = self.slots[cursor] {
            self.slots[cursor] = Slot::Child { parent: root };
            cursor = parent;
        }

        Ok(root)
    }

    /// Merges the trees rooted at `a` and `b`, returning the surviving root.
    ///
    /// The smaller tree is attached under the larger tree's root; on a size
    /// tie `a` wins. When `a == b` the call is a no-op returning `a`. The
    /// surviving root's size becomes the sum of both trees.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either argument is outside
    /// `[0, len)` and [`ForestError::NotARoot`] when either is not currently
    /// a root — callers must resolve arguments with [`Self::find`] first.
    pub fn union(&mut self, a: usize, b: usize) -> Result<usize, ForestError> {
        let a_size = self.root_size(a)?;
        let b_size = self.root_size(b)?;
        if a == b {
            return Ok(a);
        }

        let (winner, loser) = if b_size > a_size { (b, a) } else { (a, b) };
        self.slots[loser] = Slot::Child { parent: winner };
        self.slots[winner] = Slot::Root {
            size: a_size + b_size,
        };
        Ok(winner)
    }
}
