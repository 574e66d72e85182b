use core::cmp::Ordering;
use displaydoc::Display;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestError {
    #[error("Forest size must be non-negative, got {size}")]
    InvalidSize { size: i32 },

    #[error("Element {element} is out of bounds for a forest of size {size}")]
    OutOfBounds { element: i32, size: usize },
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
enum Merge {
    /// already in the set rooted at {root}
    Redundant { root: u32 },
    /// attached root {child} under root {root}, now of rank {rank}
    Attached { child: u32, root: u32, rank: u8 },
}

/// A partition of `0..size` into disjoint sets.
///
/// Every element starts out as its own singleton set. Sets can only ever be merged, never split,
/// and the universe never grows.
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    // A root points to itself.
    parents: Vec<u32>,
    // Only meaningful for roots. Starts at 1 and never exceeds 32 for a `u32` universe.
    ranks: Vec<u8>,
    // Number of members, only meaningful for roots.
    lens: Vec<u32>,
    set_count: usize,
}

impl DisjointSetForest {
    pub fn new(size: i32) -> Result<Self, ForestError> {
        let len = u32::try_from(size).map_err(|_| ForestError::InvalidSize { size })?;
        log::debug!("creating disjoint-set forest of {len} elements");
        Ok(Self {
            parents: (0..len).collect(),
            ranks: vec![1; len as usize],
            lens: vec![1; len as usize],
            set_count: len as usize,
        })
    }

    /// The size of the universe, fixed at construction.
    pub fn size(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn is_connected(&mut self, p: i32, q: i32) -> Result<bool, ForestError> {
        let p = self.index(p)?;
        let q = self.index(q)?;
        Ok(self.find(p) == self.find(q))
    }

    /// Merge the sets containing `p` and `q`. Merging two elements of the same set is a no-op.
    pub fn union_elements(&mut self, p: i32, q: i32) -> Result<(), ForestError> {
        // Both ids are checked before `find` gets a chance to compress anything.
        let p = self.index(p)?;
        let q = self.index(q)?;
        let merge = self.merge(p, q);
        log::trace!("union({p}, {q}): {merge}");
        Ok(())
    }

    /// The number of elements in the set containing `element`.
    pub fn set_len(&mut self, element: i32) -> Result<usize, ForestError> {
        let element = self.index(element)?;
        let root = self.find(element);
        Ok(self.lens[root as usize] as usize)
    }

    pub fn is_singleton(&mut self, element: i32) -> Result<bool, ForestError> {
        Ok(self.set_len(element)? == 1)
    }

    /// Lists every set with its members in increasing order. Sets are ordered by their smallest
    /// member.
    pub fn groups(&mut self) -> Vec<Vec<u32>> {
        let mut by_root: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
        for element in 0..self.parents.len() as u32 {
            let root = self.find(element);
            by_root.entry(root).or_default().push(element);
        }
        let mut groups: Vec<Vec<u32>> = by_root.into_values().collect();
        groups.sort_unstable_by_key(|group| group[0]);
        groups
    }

    fn index(&self, element: i32) -> Result<u32, ForestError> {
        match u32::try_from(element) {
            Ok(index) if (index as usize) < self.parents.len() => Ok(index),
            _ => Err(ForestError::OutOfBounds {
                element,
                size: self.parents.len(),
            }),
        }
    }

    // Path halving: every visited node is repointed to its grandparent. Ranks are left alone, so
    // after compression they are only upper bounds on the height.
    fn find(&mut self, mut element: u32) -> u32 {
        while self.parents[element as usize] != element {
            let grandparent = self.parents[self.parents[element as usize] as usize];
            self.parents[element as usize] = grandparent;
            element = grandparent;
        }
        element
    }

    fn merge(&mut self, p: u32, q: u32) -> Merge {
        let p_root = self.find(p);
        let q_root = self.find(q);
        if p_root == q_root {
            return Merge::Redundant { root: p_root };
        }

        let (child, root) = match self.ranks[p_root as usize].cmp(&self.ranks[q_root as usize]) {
            Ordering::Less => (p_root, q_root),
            Ordering::Greater => (q_root, p_root),
            Ordering::Equal => {
                self.ranks[p_root as usize] += 1;
                (q_root, p_root)
            }
        };
        self.parents[child as usize] = root;
        self.lens[root as usize] += self.lens[child as usize];
        self.set_count -= 1;

        Merge::Attached {
            child,
            root,
            rank: self.ranks[root as usize],
        }
    }
}
