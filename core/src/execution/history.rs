//! Step log recording every spanning tree decision
//!
//! This module provides the append-only execution history that the engine
//! populates during a run. Each [`Step`] captures the algorithm state at one
//! point in time (the partition or frontier snapshot, the running cost and a
//! human-readable explanation) so a visualizer can replay the run forward and
//! backward without re-executing the algorithm.
//!
//! Steps are immutable once appended and the log exposes no way to remove or
//! rewrite them.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::{Edge, Vertex};

/// Error types for step log queries
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HistoryError {
    #[error("Invalid step index {index}: log holds {len} steps")]
    InvalidIndex { index: usize, len: usize },
}

/// Kind of decision a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Initial state before any edge is examined
    Init,
    /// Edge added to the tree
    Accept,
    /// Edge examined and discarded
    Reject,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Init => "init",
            StepKind::Accept => "accept",
            StepKind::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// One recorded decision
///
/// `components` holds the state snapshot taken right after the decision.
/// For the edge-sorted algorithm it is the current partition into connected
/// components; for the frontier-growth algorithm it is exactly two groups,
/// the visited vertices followed by the unvisited ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "step_type")]
    kind: StepKind,
    edge: Option<Edge>,
    accepted: bool,
    components: Vec<Vec<Vertex>>,
    explanation: String,
    total_cost: f64,
}

impl Step {
    pub fn init(components: Vec<Vec<Vertex>>, explanation: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Init,
            edge: None,
            accepted: false,
            components,
            explanation: explanation.into(),
            total_cost: 0.0,
        }
    }

    pub fn accept(
        edge: Edge,
        components: Vec<Vec<Vertex>>,
        explanation: impl Into<String>,
        total_cost: f64,
    ) -> Self {
        Self {
            kind: StepKind::Accept,
            edge: Some(edge),
            accepted: true,
            components,
            explanation: explanation.into(),
            total_cost,
        }
    }

    pub fn reject(
        edge: Edge,
        components: Vec<Vec<Vertex>>,
        explanation: impl Into<String>,
        total_cost: f64,
    ) -> Self {
        Self {
            kind: StepKind::Reject,
            edge: Some(edge),
            accepted: false,
            components,
            explanation: explanation.into(),
            total_cost,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Edge under consideration, absent only for `init`
    pub fn edge(&self) -> Option<&Edge> {
        self.edge.as_ref()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn components(&self) -> &[Vec<Vertex>] {
        &self.components
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Cost of all edges accepted up to and including this step
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// Ordered, append-only sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step; returns its index
    pub fn push(&mut self, step: Step) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    /// Step at `index`, failing if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&Step, HistoryError> {
        self.steps.get(index).ok_or(HistoryError::InvalidIndex {
            index,
            len: self.steps.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The most recent `accept` step, if any
    pub fn last_accept(&self) -> Option<&Step> {
        self.steps.iter().rev().find(|s| s.kind == StepKind::Accept)
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
