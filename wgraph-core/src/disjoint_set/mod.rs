//! Union-find (disjoint set union) structure used by the Kruskal engine.
//!
//! Elements are identified by `usize` ordinals in `[0, len)`. Unions are
//! ranked, and every [`DisjointSets::find`] compresses the visited path so
//! that subsequent lookups reach the root in a single hop.

mod display;

use crate::error::DisjointSetError;

type DisjointSetResult<T> = core::result::Result<T, DisjointSetError>;

/// Partition of `[0, len)` into disjoint sets.
///
/// # Examples
/// ```
/// use wgraph_core::DisjointSets;
///
/// let mut sets = DisjointSets::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.disjoint_set_count(), 3);
/// # Ok::<(), wgraph_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u32>,
    max_height: u32,
    set_count: usize,
}

impl DisjointSets {
    /// Creates `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            max_height: 0,
            set_count: size,
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the maximum rank reached by any tree so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> u32 { self.max_height }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn disjoint_set_count(&self) -> usize { self.set_count }

    /// Finds the representative of the set containing `element`.
    ///
    /// Every node on the path from `element` to its root is re-pointed at the
    /// root before returning.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> DisjointSetResult<usize> {
        self.ensure_element(element)?;

        let root = self.root_of(element);
        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Returns `true` when `element` has never been merged with another set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element >= len`.
    pub fn is_singleton(&self, element: usize) -> DisjointSetResult<bool> {
        self.ensure_element(element)?;
        Ok(self.parent[element] == element && self.rank[element] == 0)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged. The root with the
    /// larger rank survives; on equal ranks the root of `left` survives and its
    /// rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] when either element is
    /// out of range. Nothing is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> DisjointSetResult<bool> {
        self.ensure_element(left)?;
        self.ensure_element(right)?;

        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        self.set_count = self.set_count.saturating_sub(1);

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank >= right_rank {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                let grown = left_rank.saturating_add(1);
                self.rank[left_root] = grown;
                self.max_height = self.max_height.max(grown);
            }
        } else {
            self.parent[left_root] = right_root;
        }

        Ok(true)
    }

    /// Returns every element to its own singleton set.
    pub fn clear(&mut self) {
        if self.set_count == self.len() {
            return;
        }

        self.max_height = 0;
        self.set_count = self.len();
        for (index, (parent, rank)) in self.parent.iter_mut().zip(&mut self.rank).enumerate() {
            *parent = index;
            *rank = 0;
        }
    }

    /// Root lookup without path compression, for read-only callers.
    fn root_of(&self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    fn ensure_element(&self, element: usize) -> DisjointSetResult<()> {
        if element < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::ElementOutOfRange {
                element,
                size: self.len(),
            })
        }
    }
}
