//! Core algorithm trait definitions for spanning tree computation
//!
//! This module establishes the shared vocabulary of the engine: the
//! algorithm selector, the error taxonomy, and the trait every traced
//! spanning tree algorithm implements.
//!
//! # Key Design Principles
//! - Algorithms hold configuration only; all working state lives on the
//!   stack of a single `run` call, so one instance can serve concurrent runs
//! - Runs are pure and deterministic: the same graph and start vertex yield
//!   the same result and the same step log
//! - Degenerate and disconnected graphs are results, not errors
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::graph::mst::MstResult;
use crate::data_structures::graph::Graph;
use crate::data_structures::union_find::UnionFindError;
use crate::execution::history::HistoryError;

/// Algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Edge-sorted cycle avoidance over a disjoint set (Kruskal)
    #[serde(rename = "kruskal", alias = "edge_sorted")]
    EdgeSorted,
    /// Frontier growth from a start vertex (Prim)
    #[serde(rename = "prim", alias = "frontier_growth")]
    FrontierGrowth,
}

impl Default for AlgorithmKind {
    fn default() -> Self {
        AlgorithmKind::EdgeSorted
    }
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::EdgeSorted, AlgorithmKind::FrontierGrowth];

    /// Short selector name accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::EdgeSorted => "kruskal",
            AlgorithmKind::FrontierGrowth => "prim",
        }
    }

    /// Whether the algorithm grows from a start vertex
    pub fn uses_start_vertex(self) -> bool {
        matches!(self, AlgorithmKind::FrontierGrowth)
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" | "edge_sorted" | "edge-sorted" => Ok(AlgorithmKind::EdgeSorted),
            "prim" | "frontier_growth" | "frontier-growth" => Ok(AlgorithmKind::FrontierGrowth),
            _ => Err(AlgorithmError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Error types for spanning tree operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    #[error("Unknown algorithm: {0}. Valid options: kruskal, prim")]
    UnknownAlgorithm(String),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Invalid weight {weight} on edge {u}-{v}")]
    InvalidWeight { u: String, v: String, weight: f64 },

    #[error("Invalid step lookup: {0}")]
    InvalidStep(#[from] HistoryError),

    #[error("Disjoint set failure: {0}")]
    UnionFind(#[from] UnionFindError),

    #[error("Invalid spanning forest: {0}")]
    InvalidTree(String),
}

/// Traced spanning tree algorithm
///
/// # Invariants
/// - `run` never mutates the graph
/// - Two runs over the same graph and start vertex produce equal results
/// - The returned step log starts with exactly one `init` step
pub trait SpanningTreeAlgorithm: Debug + Send + Sync {
    /// Returns the algorithm selector
    fn kind(&self) -> AlgorithmKind;

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns a short description with complexity
    fn description(&self) -> &'static str;

    /// Runs the algorithm, recording every decision
    ///
    /// `start` is only meaningful for algorithms that grow from a vertex;
    /// others ignore it.
    fn run(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError>;
}
