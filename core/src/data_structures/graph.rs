//! Weighted undirected graph over labelled vertices
//!
//! This module implements the graph representation consumed by the spanning
//! tree engine. Vertices are opaque string labels; edges are value objects
//! carrying an unordered endpoint pair and a weight supplied by whatever
//! provider sourced the graph (static cost tables, geodesic distances, ...).
//!
//! # Ordering Guarantees
//!
//! - The vertex set is kept in lexicographic order, which is the canonical
//!   order used for indexing, default start vertices and snapshots.
//! - The edge list preserves insertion order; algorithms sort their own copy.
//! - Adjacency lists preserve insertion order per vertex.
//!
//! Construction is purely additive. Once built, a graph is read-only from the
//! engine's perspective.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertex identifier
pub type Vertex = String;

/// Adjacency entry: neighbouring vertex and the weight of the connecting edge
pub type Neighbor = (Vertex, f64);

/// Undirected weighted edge
///
/// The endpoint order is kept as supplied; it carries no meaning for the
/// graph but the frontier-growth algorithm uses it to record which endpoint
/// was already in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: impl Into<Vertex>, v: impl Into<Vertex>, weight: f64) -> Self {
        Self { u: u.into(), v: v.into(), weight }
    }

    /// Whether this edge joins `a` and `b`, in either orientation
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.u, self.v)
    }
}

/// Graph of labelled vertices and weighted undirected edges
///
/// Invariant: every edge's endpoints are members of the vertex set, and every
/// edge appears in the adjacency lists of both endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Known vertices in canonical order
    vertices: BTreeSet<Vertex>,

    /// Edges in insertion order
    edges: Vec<Edge>,

    /// Symmetric adjacency mapping
    adjacency: HashMap<Vertex, Vec<Neighbor>>,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a mapping of vertex pairs to weights
    ///
    /// Pairs are canonicalised to `(min, max)` so `(u, v)` and `(v, u)` name
    /// the same edge; when a pair is supplied more than once the last weight
    /// wins. Edges are inserted in lexicographic pair order, which makes the
    /// resulting edge order independent of the caller's iteration order.
    pub fn from_costs<I, K>(costs: I) -> Self
    where
        I: IntoIterator<Item = ((K, K), f64)>,
        K: Into<Vertex>,
    {
        let mut canonical: BTreeMap<(Vertex, Vertex), f64> = BTreeMap::new();
        for ((a, b), weight) in costs {
            let (a, b) = (a.into(), b.into());
            let key = if a <= b { (a, b) } else { (b, a) };
            canonical.insert(key, weight);
        }

        let mut graph = Self::new();
        for ((u, v), weight) in canonical {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Registers a vertex without any incident edge
    ///
    /// Returns `false` if the vertex was already known.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        let vertex = vertex.into();
        if self.vertices.contains(&vertex) {
            return false;
        }
        self.adjacency.entry(vertex.clone()).or_default();
        self.vertices.insert(vertex)
    }

    /// Adds an undirected edge, registering its endpoints if new
    ///
    /// Validation is left to the engine configuration. A weight of `-0.0` is
    /// stored as `0.0` so that both zeros compare equal under `total_cmp`.
    pub fn add_edge(&mut self, u: impl Into<Vertex>, v: impl Into<Vertex>, weight: f64) {
        let weight = weight + 0.0;
        let edge = Edge::new(u, v, weight);

        self.add_vertex(edge.u.clone());
        self.add_vertex(edge.v.clone());

        self.adjacency
            .entry(edge.u.clone())
            .or_default()
            .push((edge.v.clone(), weight));
        self.adjacency
            .entry(edge.v.clone())
            .or_default()
            .push((edge.u.clone(), weight));

        self.edges.push(edge);
    }

    /// All edges in insertion order
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Adjacency list of `vertex`, empty if it has no edges or is unknown
    pub fn neighbors(&self, vertex: &str) -> &[Neighbor] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The set of known vertices
    pub fn vertex_set(&self) -> &BTreeSet<Vertex> {
        &self.vertices
    }

    /// Vertices in canonical (lexicographic) order
    pub fn sorted_vertices(&self) -> Vec<Vertex> {
        self.vertices.iter().cloned().collect()
    }

    /// Position of `vertex` in canonical order
    pub fn vertex_index(&self, vertex: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    /// Whether an edge between `a` and `b` with exactly `weight` was added
    pub fn contains_edge(&self, a: &str, b: &str, weight: f64) -> bool {
        self.neighbors(a)
            .iter()
            .any(|(n, w)| n == b && *w == weight)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
