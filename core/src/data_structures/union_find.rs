//! Disjoint-set (union-find) structure for cycle detection
//!
//! Tracks a partition of the index space `[0, n)` into connected components.
//! The edge-sorted spanning tree algorithm uses it to decide whether an edge
//! would close a cycle, and to snapshot the current partition after every
//! decision so the trace can be replayed.
//!
//! # Complexity
//!
//! Path compression combined with union by rank gives O(α(n)) amortized
//! `find`/`union`, where α is the inverse Ackermann function. `components`
//! is O(n α(n)) and is recomputed from scratch on each call.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Union-find errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UnionFindError {
    #[error("Index {index} out of range for disjoint set of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Union-Find data structure with path compression and union by rank
///
/// Every index belongs to exactly one component at all times and the
/// partition only coarsens: `union` never splits a component.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers for each element
    parent: Vec<usize>,
    /// Rank (upper bound on tree depth) of each root
    rank: Vec<usize>,
    /// Number of disjoint sets
    num_components: usize,
}

impl DisjointSet {
    /// Create a new disjoint set with `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            num_components: n,
        }
    }

    /// Number of elements in the index space
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components
    pub fn count(&self) -> usize {
        self.num_components
    }

    fn check(&self, index: usize) -> Result<(), UnionFindError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::IndexOutOfRange { index, len: self.parent.len() })
        }
    }

    /// Find the representative of the component containing `x`
    ///
    /// Compresses the path so every visited element points directly at the
    /// root afterwards.
    pub fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the components containing `x` and `y`
    ///
    /// Returns `true` if two distinct components were merged and `false` if
    /// they were already joined (which is not an error).
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(false);
        }

        // Attach the shallower tree under the deeper one
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => {
                self.parent[root_x] = root_y;
            },
            Ordering::Greater => {
                self.parent[root_y] = root_x;
            },
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.num_components -= 1;
        Ok(true)
    }

    /// Check whether `x` and `y` share a component
    ///
    /// Observationally pure: path compression may rewrite parent pointers but
    /// never changes the partition.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Current partition as groups of member indices
    ///
    /// Groups are ordered by their smallest member and members ascend within
    /// each group, so the grouping depends only on the partition itself and
    /// not on the internal tree shape.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.num_components);

        for i in 0..n {
            let root = self.find_root(i);
            match slot_of_root[root] {
                Some(slot) => groups[slot].push(i),
                None => {
                    slot_of_root[root] = Some(groups.len());
                    groups.push(vec![i]);
                }
            }
        }

        groups
    }
}
