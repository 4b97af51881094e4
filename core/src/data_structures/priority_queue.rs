//! Lazy min-priority frontier for tree growth
//!
//! The frontier-growth algorithm keeps every candidate edge that leaves the
//! visited region in a binary heap, without decrease-key: a vertex may be
//! reachable through several queued entries, and entries whose target was
//! visited in the meantime are discarded when popped.
//!
//! Entries are totally ordered by `(weight, sequence)`, where `sequence` is
//! the insertion counter. Equal weights therefore pop in insertion order and
//! the pop sequence is a pure function of the push sequence.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::data_structures::graph::{Edge, Vertex};

/// Candidate edge from a visited `source` to a possibly unvisited `target`
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    pub weight: f64,
    pub source: Vertex,
    pub target: Vertex,
    sequence: u64,
}

impl FrontierEntry {
    /// Converts the entry into an edge oriented `source -> target`
    pub fn into_edge(self) -> Edge {
        Edge::new(self.source, self.target, self.weight)
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of frontier entries with deterministic tie-breaking
#[derive(Debug, Clone, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
    pushes: usize,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a candidate edge; `-0.0` is queued as `0.0`
    pub fn push(&mut self, weight: f64, source: impl Into<Vertex>, target: impl Into<Vertex>) {
        let entry = FrontierEntry {
            weight: weight + 0.0,
            source: source.into(),
            target: target.into(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.pushes += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes the lightest entry, earliest-inserted first among equals
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of entries ever pushed
    pub fn total_pushes(&self) -> usize {
        self.pushes
    }
}
