//! A disjoint-set forest (union-find) over a fixed universe of small integer ids.
//!
//! Sets are stored as rooted trees. Roots are found with path halving, and merges attach the
//! lower-rank root under the higher-rank one, which keeps every operation near-constant in the
//! amortized sense.
//!
//! Even connectivity queries compress paths and therefore take `&mut self`. A forest shared between
//! threads has to live behind a lock.

mod union_find;

pub use crate::union_find::{DisjointSetForest, ForestError};
