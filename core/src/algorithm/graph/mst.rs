//! Minimum Spanning Tree Algorithm Implementation
//!
//! This module implements the two traced minimum spanning tree algorithms:
//! an edge-sorted algorithm with union-find cycle detection (Kruskal) and a
//! frontier-growth algorithm with a lazy priority queue (Prim). Both record
//! every decision they make into a [`StepLog`], so the result carries a
//! complete, replayable trace alongside the final tree.
//!
//! # Theoretical Foundation
//!
//! - **Cut Property**: for any cut (S, V-S), the minimum-weight crossing edge
//!   is safe for the MST (frontier-growth foundation)
//! - **Cycle Property**: for any cycle, the maximum-weight edge is not in any
//!   MST (edge-sorted foundation)
//!
//! # Determinism
//!
//! - Edge-sorted: a stable sort by weight, so equal weights keep the graph's
//!   insertion order. Vertices are indexed in lexicographic order.
//! - Frontier-growth: the frontier pops by `(weight, insertion sequence)`.
//!   Snapshots list vertices lexicographically.
//!
//! # Partial Results
//!
//! Disconnected inputs produce a spanning forest rather than an error;
//! [`MstResult::is_complete`] tells callers whether a full tree was found.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmKind, SpanningTreeAlgorithm};
use crate::config::EngineConfig;
use crate::data_structures::graph::{Edge, Graph, Vertex};
use crate::data_structures::priority_queue::FrontierQueue;
use crate::data_structures::union_find::DisjointSet;
use crate::execution::history::{Step, StepLog};

/// Counters collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstStatistics {
    pub edges_examined: usize,
    pub union_operations: usize,
    pub connectivity_checks: usize,
    pub frontier_pushes: usize,
    pub stale_entries: usize,
}

/// Minimum spanning tree (or forest) with its full decision trace
///
/// Read-only once returned: every field is exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    algorithm: AlgorithmKind,
    vertex_count: usize,
    edges: Vec<Edge>,
    total_cost: f64,
    steps: StepLog,
    is_complete: bool,
    statistics: MstStatistics,
}

impl MstResult {
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Number of vertices of the input graph
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Accepted edges in acceptance order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of accepted edge weights
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    /// Step at `index`, failing if `index >= steps().len()`
    pub fn step(&self, index: usize) -> Result<&Step, AlgorithmError> {
        Ok(self.steps.get(index)?)
    }

    /// Whether the accepted edges span every vertex
    /// (`edges == vertices - 1`); false for disconnected inputs
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn statistics(&self) -> &MstStatistics {
        &self.statistics
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Accumulates edges, cost and steps for one run
///
/// Owned exclusively by the running algorithm and consumed by `finish`.
#[derive(Debug, Default)]
struct RunRecorder {
    edges: Vec<Edge>,
    total_cost: f64,
    steps: StepLog,
    statistics: MstStatistics,
}

impl RunRecorder {
    fn new() -> Self {
        Self::default()
    }

    fn accepted(&self) -> usize {
        self.edges.len()
    }

    fn init(&mut self, components: Vec<Vec<Vertex>>, explanation: String) {
        trace!("init: {}", explanation);
        self.steps.push(Step::init(components, explanation));
    }

    fn accept(&mut self, edge: Edge, components: Vec<Vec<Vertex>>, explanation: String) {
        self.statistics.edges_examined += 1;
        self.total_cost += edge.weight;
        trace!("accept {} (running cost {})", edge, self.total_cost);
        self.edges.push(edge.clone());
        self.steps
            .push(Step::accept(edge, components, explanation, self.total_cost));
    }

    fn reject(&mut self, edge: Edge, components: Vec<Vec<Vertex>>, explanation: String) {
        self.statistics.edges_examined += 1;
        trace!("reject {}", edge);
        self.steps
            .push(Step::reject(edge, components, explanation, self.total_cost));
    }

    fn finish(self, algorithm: AlgorithmKind, vertex_count: usize) -> MstResult {
        let is_complete = self.edges.len() == vertex_count.saturating_sub(1);
        debug!(
            "{} finished: {} vertices, {} edges accepted, {} steps, cost {}, complete: {}",
            algorithm,
            vertex_count,
            self.edges.len(),
            self.steps.len(),
            self.total_cost,
            is_complete
        );
        MstResult {
            algorithm,
            vertex_count,
            edges: self.edges,
            total_cost: self.total_cost,
            steps: self.steps,
            is_complete,
            statistics: self.statistics,
        }
    }
}

/// Checks edge weights; fails only when `reject` is set
fn check_weights(graph: &Graph, reject: bool) -> Result<(), AlgorithmError> {
    for edge in graph.all_edges() {
        if edge.weight.is_finite() && edge.weight >= 0.0 {
            continue;
        }
        if reject {
            return Err(AlgorithmError::InvalidWeight {
                u: edge.u.clone(),
                v: edge.v.clone(),
                weight: edge.weight,
            });
        }
        warn!("edge {} carries unusual weight {}", edge, edge.weight);
    }
    Ok(())
}

/// Translates index groups back to vertex labels
fn label_groups(groups: Vec<Vec<usize>>, vertices: &[Vertex]) -> Vec<Vec<Vertex>> {
    groups
        .into_iter()
        .map(|group| group.into_iter().map(|i| vertices[i].clone()).collect())
        .collect()
}

/// `[visited, unvisited]`, both in canonical order
fn frontier_snapshot(vertices: &[Vertex], visited: &BTreeSet<Vertex>) -> Vec<Vec<Vertex>> {
    let unvisited: Vec<Vertex> = vertices
        .iter()
        .filter(|v| !visited.contains(*v))
        .cloned()
        .collect();
    vec![visited.iter().cloned().collect(), unvisited]
}

/// Edge-sorted spanning tree algorithm (Kruskal)
///
/// **Algorithm**: sort edges by weight, accept each edge whose endpoints lie
/// in different components
/// **Time Complexity**: O(E log E + E·V) including per-step partition snapshots
/// **Correctness**: cycle property ensures optimality
#[derive(Debug, Clone, Default)]
pub struct EdgeSorted {
    reject_invalid_weights: bool,
}

impl EdgeSorted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight_validation(mut self, reject: bool) -> Self {
        self.reject_invalid_weights = reject;
        self
    }

    pub fn compute(&self, graph: &Graph) -> Result<MstResult, AlgorithmError> {
        check_weights(graph, self.reject_invalid_weights)?;

        let vertices = graph.sorted_vertices();
        let index: HashMap<&str, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();
        let lookup = |v: &str| {
            index
                .get(v)
                .copied()
                .ok_or_else(|| AlgorithmError::UnknownVertex(v.to_string()))
        };

        let mut components = DisjointSet::new(vertices.len());

        // Stable: equal weights keep insertion order
        let mut sorted: Vec<&Edge> = graph.all_edges().iter().collect();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut recorder = RunRecorder::new();
        recorder.init(
            label_groups(components.components(), &vertices),
            format!("Initialized: {} vertices, {} edges", vertices.len(), sorted.len()),
        );

        let target = vertices.len().saturating_sub(1);

        for edge in sorted {
            if recorder.accepted() == target {
                break;
            }

            let a = lookup(edge.u.as_str())?;
            let b = lookup(edge.v.as_str())?;

            recorder.statistics.connectivity_checks += 1;
            if components.connected(a, b)? {
                recorder.reject(
                    edge.clone(),
                    label_groups(components.components(), &vertices),
                    format!("Rejected edge {} (would form a cycle)", edge),
                );
            } else {
                components.union(a, b)?;
                recorder.statistics.union_operations += 1;
                recorder.accept(
                    edge.clone(),
                    label_groups(components.components(), &vertices),
                    format!("Accepted edge {} (weight {})", edge, edge.weight),
                );
            }
        }

        Ok(recorder.finish(AlgorithmKind::EdgeSorted, vertices.len()))
    }
}

impl SpanningTreeAlgorithm for EdgeSorted {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::EdgeSorted
    }

    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn description(&self) -> &'static str {
        "Examines edges in ascending weight order and accepts each edge that joins two \
         different components, tracked with a disjoint set. O(E log E)."
    }

    fn run(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
        if let Some(start) = start {
            debug!("edge-sorted run ignores start vertex {}", start);
        }
        self.compute(graph)
    }
}

/// Frontier-growth spanning tree algorithm (Prim)
///
/// **Algorithm**: grow a tree from a start vertex by repeatedly taking the
/// lightest frontier edge whose target is unvisited
/// **Time Complexity**: O(E log E) with a lazy binary heap
/// **Correctness**: cut property ensures optimality
#[derive(Debug, Clone, Default)]
pub struct FrontierGrowth {
    reject_invalid_weights: bool,
}

impl FrontierGrowth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight_validation(mut self, reject: bool) -> Self {
        self.reject_invalid_weights = reject;
        self
    }

    /// Runs from `start`, or from the lexicographically smallest vertex
    pub fn compute(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
        check_weights(graph, self.reject_invalid_weights)?;

        let vertices = graph.sorted_vertices();
        let mut recorder = RunRecorder::new();

        let start = match start {
            Some(s) if graph.contains_vertex(s) => s.to_string(),
            Some(s) => return Err(AlgorithmError::UnknownVertex(s.to_string())),
            None => match vertices.first() {
                Some(first) => first.clone(),
                None => {
                    recorder.init(vec![Vec::new(), Vec::new()], "Graph has no vertices".to_string());
                    return Ok(recorder.finish(AlgorithmKind::FrontierGrowth, 0));
                }
            },
        };

        let mut visited: BTreeSet<Vertex> = BTreeSet::new();
        visited.insert(start.clone());

        let mut frontier = FrontierQueue::new();
        for (neighbor, weight) in graph.neighbors(&start) {
            frontier.push(*weight, start.clone(), neighbor.clone());
        }

        recorder.init(
            frontier_snapshot(&vertices, &visited),
            format!("Starting from vertex {}", start),
        );

        while visited.len() < vertices.len() {
            let Some(entry) = frontier.pop() else {
                break;
            };

            if visited.contains(&entry.target) {
                // Stale entry: target reached through an earlier pop
                recorder.statistics.stale_entries += 1;
                let explanation = format!(
                    "Rejected edge {}-{} (vertex {} already visited)",
                    entry.source, entry.target, entry.target
                );
                recorder.reject(entry.into_edge(), frontier_snapshot(&vertices, &visited), explanation);
                continue;
            }

            let reached = entry.target.clone();
            visited.insert(reached.clone());

            let edge = entry.into_edge();
            let explanation = format!("Accepted edge {} (weight {})", edge, edge.weight);
            recorder.accept(edge, frontier_snapshot(&vertices, &visited), explanation);

            for (neighbor, weight) in graph.neighbors(&reached) {
                if !visited.contains(neighbor) {
                    frontier.push(*weight, reached.clone(), neighbor.clone());
                }
            }
        }

        recorder.statistics.frontier_pushes = frontier.total_pushes();
        Ok(recorder.finish(AlgorithmKind::FrontierGrowth, vertices.len()))
    }
}

impl SpanningTreeAlgorithm for FrontierGrowth {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::FrontierGrowth
    }

    fn name(&self) -> &'static str {
        "Prim"
    }

    fn description(&self) -> &'static str {
        "Grows a tree from a start vertex, always taking the lightest edge that leaves the \
         visited region. O(E log E) with a lazy binary heap."
    }

    fn run(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
        self.compute(graph, start)
    }
}

/// Per-algorithm summary used by [`Comparison`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_cost: f64,
    pub edges: Vec<Edge>,
    pub steps_count: usize,
    pub is_complete: bool,
}

impl From<&MstResult> for RunSummary {
    fn from(result: &MstResult) -> Self {
        Self {
            total_cost: result.total_cost(),
            edges: result.edges().to_vec(),
            steps_count: result.steps().len(),
            is_complete: result.is_complete(),
        }
    }
}

/// Side-by-side outcome of both algorithms on one graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(rename = "kruskal")]
    pub edge_sorted: RunSummary,
    #[serde(rename = "prim")]
    pub frontier_growth: RunSummary,
    /// Total costs agree within the configured tolerance
    pub same_result: bool,
}

/// Spanning tree engine
///
/// Holds configuration only. Every call builds its own working state, so a
/// single solver may be shared between concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct MstSolver {
    config: EngineConfig,
    edge_sorted: EdgeSorted,
    frontier_growth: FrontierGrowth,
}

impl MstSolver {
    pub fn new(config: EngineConfig) -> Self {
        let reject = config.reject_invalid_weights;
        Self {
            config,
            edge_sorted: EdgeSorted::new().with_weight_validation(reject),
            frontier_growth: FrontierGrowth::new().with_weight_validation(reject),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Algorithm implementation behind a selector
    pub fn algorithm(&self, kind: AlgorithmKind) -> &dyn SpanningTreeAlgorithm {
        match kind {
            AlgorithmKind::EdgeSorted => &self.edge_sorted,
            AlgorithmKind::FrontierGrowth => &self.frontier_growth,
        }
    }

    pub fn kruskal(&self, graph: &Graph) -> Result<MstResult, AlgorithmError> {
        self.edge_sorted.compute(graph)
    }

    /// Frontier growth from `start`, falling back to the configured default
    /// start vertex and then to the smallest vertex
    pub fn prim(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
        let start = start.or(self.config.default_start_vertex.as_deref());
        self.frontier_growth.compute(graph, start)
    }

    pub fn solve(
        &self,
        graph: &Graph,
        kind: AlgorithmKind,
        start: Option<&str>,
    ) -> Result<MstResult, AlgorithmError> {
        let start = if kind.uses_start_vertex() {
            start.or(self.config.default_start_vertex.as_deref())
        } else {
            start
        };
        self.algorithm(kind).run(graph, start)
    }

    /// Runs the algorithm named by `selector`; unknown names are an error
    pub fn solve_named(
        &self,
        graph: &Graph,
        selector: &str,
        start: Option<&str>,
    ) -> Result<MstResult, AlgorithmError> {
        let kind: AlgorithmKind = selector.parse()?;
        self.solve(graph, kind, start)
    }

    /// Runs the configured default algorithm
    pub fn solve_default(&self, graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
        self.solve(graph, self.config.default_algorithm, start)
    }

    /// Runs both algorithms and compares their total costs
    pub fn compare(&self, graph: &Graph, start: Option<&str>) -> Result<Comparison, AlgorithmError> {
        let kruskal = self.kruskal(graph)?;
        let prim = self.prim(graph, start)?;

        let same_result =
            (kruskal.total_cost() - prim.total_cost()).abs() < self.config.cost_tolerance;
        if !same_result && kruskal.is_complete() && prim.is_complete() {
            warn!(
                "spanning tree costs disagree: kruskal {} vs prim {}",
                kruskal.total_cost(),
                prim.total_cost()
            );
        }

        Ok(Comparison {
            edge_sorted: RunSummary::from(&kruskal),
            frontier_growth: RunSummary::from(&prim),
            same_result,
        })
    }
}

/// Runs the edge-sorted algorithm with default settings
pub fn run_edge_sorted(graph: &Graph) -> Result<MstResult, AlgorithmError> {
    EdgeSorted::new().compute(graph)
}

/// Runs the frontier-growth algorithm with default settings
pub fn run_frontier_growth(graph: &Graph, start: Option<&str>) -> Result<MstResult, AlgorithmError> {
    FrontierGrowth::new().compute(graph, start)
}

/// Validate a result against its input graph
///
/// Verification includes:
/// 1. Every accepted edge exists in the graph
/// 2. Forest property (no cycles)
/// 3. Total cost equals the sum of accepted weights
/// 4. `is_complete` agrees with the edge count and the forest is connected
///    when complete
pub fn verify_forest(graph: &Graph, result: &MstResult) -> Result<(), AlgorithmError> {
    let vertices = graph.sorted_vertices();
    if result.vertex_count() != vertices.len() {
        return Err(AlgorithmError::InvalidTree(format!(
            "result covers {} vertices, graph has {}",
            result.vertex_count(),
            vertices.len()
        )));
    }

    let mut forest = DisjointSet::new(vertices.len());
    let mut sum = 0.0;

    for edge in result.edges() {
        if !graph.contains_edge(&edge.u, &edge.v, edge.weight) {
            return Err(AlgorithmError::InvalidTree(format!("edge {} is not in the graph", edge)));
        }
        let a = graph
            .vertex_index(&edge.u)
            .ok_or_else(|| AlgorithmError::UnknownVertex(edge.u.clone()))?;
        let b = graph
            .vertex_index(&edge.v)
            .ok_or_else(|| AlgorithmError::UnknownVertex(edge.v.clone()))?;
        if !forest.union(a, b)? {
            return Err(AlgorithmError::InvalidTree(format!("edge {} closes a cycle", edge)));
        }
        sum += edge.weight;
    }

    if (sum - result.total_cost()).abs() > 1e-9 {
        return Err(AlgorithmError::InvalidTree(format!(
            "total cost {} differs from edge sum {}",
            result.total_cost(),
            sum
        )));
    }

    let complete = result.edges().len() == vertices.len().saturating_sub(1);
    if complete != result.is_complete() {
        return Err(AlgorithmError::InvalidTree(
            "completeness flag disagrees with edge count".to_string(),
        ));
    }
    if complete && forest.count() > 1 {
        return Err(AlgorithmError::InvalidTree("spanning tree is not connected".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::history::StepKind;

    /// Six locations, nine candidate links
    fn scenario_graph() -> Graph {
        Graph::from_costs(vec![
            (("A", "B"), 3.2),
            (("A", "C"), 2.8),
            (("B", "C"), 2.1),
            (("B", "D"), 1.9),
            (("B", "E"), 1.5),
            (("C", "F"), 1.8),
            (("D", "E"), 2.9),
            (("D", "F"), 2.3),
            (("E", "F"), 2.7),
        ])
    }

    fn edge_names(result: &MstResult) -> Vec<String> {
        result.edges().iter().map(|e| e.to_string()).collect()
    }

    fn groups(raw: &[&[&str]]) -> Vec<Vec<Vertex>> {
        raw.iter()
            .map(|g| g.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_kruskal_scenario_sequence() {
        let result = run_edge_sorted(&scenario_graph()).unwrap();

        let decisions: Vec<(StepKind, String)> = result
            .steps()
            .iter()
            .skip(1)
            .map(|s| (s.kind(), s.edge().map(|e| e.to_string()).unwrap_or_default()))
            .collect();

        assert_eq!(
            decisions,
            vec![
                (StepKind::Accept, "B-E".to_string()),
                (StepKind::Accept, "C-F".to_string()),
                (StepKind::Accept, "B-D".to_string()),
                (StepKind::Accept, "B-C".to_string()),
                (StepKind::Reject, "D-F".to_string()),
                (StepKind::Reject, "E-F".to_string()),
                (StepKind::Accept, "A-C".to_string()),
            ]
        );

        assert_eq!(result.edges().len(), 5);
        assert!(result.is_complete());
        assert!((result.total_cost() - 10.1).abs() < 1e-9);
        assert_eq!(format!("{:.1}", result.total_cost()), "10.1");

        // A-B (3.2) is never examined once the tree is complete
        assert_eq!(result.steps().len(), 8);
        assert_eq!(result.statistics().edges_examined, 7);
    }

    #[test]
    fn test_kruskal_snapshots() {
        let result = run_edge_sorted(&scenario_graph()).unwrap();

        let init = result.step(0).unwrap();
        assert_eq!(init.kind(), StepKind::Init);
        assert_eq!(init.explanation(), "Initialized: 6 vertices, 9 edges");
        assert_eq!(
            init.components(),
            groups(&[&["A"], &["B"], &["C"], &["D"], &["E"], &["F"]]).as_slice()
        );

        let first = result.step(1).unwrap();
        assert_eq!(first.explanation(), "Accepted edge B-E (weight 1.5)");
        assert_eq!(
            first.components(),
            groups(&[&["A"], &["B", "E"], &["C"], &["D"], &["F"]]).as_slice()
        );

        let reject = result.step(5).unwrap();
        assert_eq!(reject.explanation(), "Rejected edge D-F (would form a cycle)");
        assert!(!reject.accepted());
        assert_eq!(
            reject.components(),
            groups(&[&["A"], &["B", "C", "D", "E", "F"]]).as_slice()
        );
        assert!((reject.total_cost() - 7.3).abs() < 1e-9);

        let last = result.steps().last().unwrap();
        assert_eq!(last.components(), groups(&[&["A", "B", "C", "D", "E", "F"]]).as_slice());
        assert_eq!(last.total_cost(), result.total_cost());
    }

    #[test]
    fn test_prim_scenario_sequence() {
        let result = run_frontier_growth(&scenario_graph(), Some("A")).unwrap();

        assert_eq!(edge_names(&result), vec!["A-C", "C-F", "C-B", "B-E", "B-D"]);
        assert!(result.is_complete());
        assert!((result.total_cost() - 10.1).abs() < 1e-9);

        // Every vertex is reached before any stale entry surfaces
        assert_eq!(result.steps().len(), 6);
        assert_eq!(result.steps().count(StepKind::Reject), 0);

        let init = result.step(0).unwrap();
        assert_eq!(init.explanation(), "Starting from vertex A");
        assert_eq!(init.components(), groups(&[&["A"], &["B", "C", "D", "E", "F"]]).as_slice());

        let second = result.step(2).unwrap();
        assert_eq!(second.components(), groups(&[&["A", "C", "F"], &["B", "D", "E"]]).as_slice());
    }

    #[test]
    fn test_prim_stale_entries_are_rejected() {
        // Triangle: from A, both A-B and A-C are queued; C is then reached
        // through B, leaving A-C stale
        let graph = Graph::from_costs(vec![
            (("A", "B"), 1.0),
            (("A", "C"), 5.0),
            (("B", "C"), 2.0),
            (("C", "D"), 9.0),
        ]);
        let result = run_frontier_growth(&graph, None).unwrap();

        let decisions: Vec<(StepKind, String)> = result
            .steps()
            .iter()
            .skip(1)
            .map(|s| (s.kind(), s.edge().map(|e| e.to_string()).unwrap_or_default()))
            .collect();
        assert_eq!(
            decisions,
            vec![
                (StepKind::Accept, "A-B".to_string()),
                (StepKind::Accept, "B-C".to_string()),
                (StepKind::Reject, "A-C".to_string()),
                (StepKind::Accept, "C-D".to_string()),
            ]
        );

        let stale = result.step(3).unwrap();
        assert_eq!(stale.explanation(), "Rejected edge A-C (vertex C already visited)");
        assert_eq!(stale.total_cost(), 3.0);
        assert_eq!(result.statistics().stale_entries, 1);
        assert_eq!(result.total_cost(), 12.0);
    }

    #[test]
    fn test_default_start_is_smallest_vertex() {
        let mut graph = Graph::new();
        graph.add_edge("kiwi", "apple", 1.0);
        graph.add_edge("mango", "kiwi", 2.0);

        let result = run_frontier_growth(&graph, None).unwrap();
        assert_eq!(result.step(0).unwrap().explanation(), "Starting from vertex apple");
        assert_eq!(result.edges()[0], Edge::new("apple", "kiwi", 1.0));
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        for result in [
            run_edge_sorted(&graph).unwrap(),
            run_frontier_growth(&graph, None).unwrap(),
        ] {
            assert!(result.edges().is_empty());
            assert_eq!(result.total_cost(), 0.0);
            assert_eq!(result.steps().len(), 1);
            assert_eq!(result.step(0).unwrap().kind(), StepKind::Init);
            assert!(result.is_complete());
        }
    }

    #[test]
    fn test_self_loop_on_single_vertex_is_not_examined() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 4.0);

        let result = run_edge_sorted(&graph).unwrap();
        assert_eq!(result.steps().len(), 1);
        assert!(result.edges().is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();

        let kruskal = run_edge_sorted(&graph).unwrap();
        assert_eq!(kruskal.steps().len(), 1);
        assert!(kruskal.step(0).unwrap().components().is_empty());

        let prim = run_frontier_growth(&graph, None).unwrap();
        assert_eq!(prim.steps().len(), 1);
        assert_eq!(prim.step(0).unwrap().components(), &[Vec::<Vertex>::new(), Vec::new()]);
        assert_eq!(prim.vertex_count(), 0);
    }

    #[test]
    fn test_two_vertex_graph() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.25);

        for result in [
            run_edge_sorted(&graph).unwrap(),
            run_frontier_growth(&graph, None).unwrap(),
        ] {
            assert_eq!(result.edges(), &[Edge::new("A", "B", 4.25)]);
            assert_eq!(result.total_cost(), 4.25);
            let kinds: Vec<StepKind> = result.steps().iter().map(|s| s.kind()).collect();
            assert_eq!(kinds, vec![StepKind::Init, StepKind::Accept]);
        }
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let graph = Graph::from_costs(vec![
            (("A", "B"), 1.0),
            (("C", "D"), 2.0),
            (("D", "E"), 3.0),
            (("C", "E"), 4.0),
        ]);

        let kruskal = run_edge_sorted(&graph).unwrap();
        assert_eq!(kruskal.edges().len(), 3);
        assert!(!kruskal.is_complete());
        // Every edge is examined because the stopping condition is never met
        assert_eq!(kruskal.statistics().edges_examined, 4);
        assert_eq!(kruskal.steps().last().unwrap().kind(), StepKind::Reject);
        assert!(verify_forest(&graph, &kruskal).is_ok());

        let prim = run_frontier_growth(&graph, Some("C")).unwrap();
        assert_eq!(edge_names(&prim), vec!["C-D", "D-E"]);
        assert!(!prim.is_complete());
        let last = prim.steps().last().unwrap();
        assert_eq!(last.components(), groups(&[&["C", "D", "E"], &["A", "B"]]).as_slice());
        assert!(verify_forest(&graph, &prim).is_ok());
    }

    #[test]
    fn test_equal_weights_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("C", "D", 1.0);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("A", "D", 1.0);

        let result = run_edge_sorted(&graph).unwrap();
        assert_eq!(edge_names(&result), vec!["C-D", "A-B", "B-C"]);
        assert_eq!(result.steps().len(), 4);
    }

    #[test]
    fn test_unknown_start_vertex() {
        let err = run_frontier_growth(&scenario_graph(), Some("Z")).unwrap_err();
        assert_eq!(err, AlgorithmError::UnknownVertex("Z".to_string()));
    }

    #[test]
    fn test_step_lookup_out_of_range() {
        let result = run_edge_sorted(&scenario_graph()).unwrap();
        assert!(result.step(7).is_ok());
        assert!(matches!(result.step(8), Err(AlgorithmError::InvalidStep(_))));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let graph = scenario_graph();
        let solver = MstSolver::default();

        for kind in AlgorithmKind::ALL {
            let first = solver.solve(&graph, kind, Some("D")).unwrap();
            let second = solver.solve(&graph, kind, Some("D")).unwrap();
            assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        }
    }

    #[test]
    fn test_solver_dispatch_and_selector() {
        let graph = scenario_graph();
        let solver = MstSolver::default();

        let prim = solver.solve_named(&graph, "prim", Some("F")).unwrap();
        assert_eq!(prim.algorithm(), AlgorithmKind::FrontierGrowth);
        assert_eq!(prim.step(0).unwrap().explanation(), "Starting from vertex F");

        let kruskal = solver.solve_named(&graph, "Kruskal", None).unwrap();
        assert_eq!(kruskal.algorithm(), AlgorithmKind::EdgeSorted);

        assert_eq!(
            solver.solve_named(&graph, "dijkstra", None).unwrap_err(),
            AlgorithmError::UnknownAlgorithm("dijkstra".to_string())
        );

        assert_eq!(solver.algorithm(AlgorithmKind::EdgeSorted).name(), "Kruskal");
        assert_eq!(solver.algorithm(AlgorithmKind::FrontierGrowth).kind(), AlgorithmKind::FrontierGrowth);
    }

    #[test]
    fn test_configured_defaults() {
        let graph = scenario_graph();
        let solver = MstSolver::new(
            EngineConfig::default()
                .with_default_algorithm(AlgorithmKind::FrontierGrowth)
                .with_default_start_vertex("E"),
        );

        let result = solver.solve_default(&graph, None).unwrap();
        assert_eq!(result.algorithm(), AlgorithmKind::FrontierGrowth);
        assert_eq!(result.step(0).unwrap().explanation(), "Starting from vertex E");

        // An explicit start vertex overrides the configured one
        let result = solver.solve_default(&graph, Some("A")).unwrap();
        assert_eq!(result.step(0).unwrap().explanation(), "Starting from vertex A");
    }

    #[test]
    fn test_invalid_weights() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", f64::NAN);

        let strict = MstSolver::new(EngineConfig::default().with_reject_invalid_weights(true));
        for kind in AlgorithmKind::ALL {
            let err = strict.solve(&graph, kind, None).unwrap_err();
            assert!(matches!(err, AlgorithmError::InvalidWeight { .. }));
        }

        // Lenient mode still runs to completion
        let lenient = MstSolver::default();
        assert!(lenient.kruskal(&graph).is_ok());
    }

    #[test]
    fn test_signed_zero_weights_tie_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 0.0);
        graph.add_edge("C", "D", -0.0);
        graph.add_edge("B", "C", 1.0);

        let strict = MstSolver::new(EngineConfig::default().with_reject_invalid_weights(true));
        let kruskal = strict.kruskal(&graph).unwrap();
        let order: Vec<String> = kruskal.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(order, vec!["A-B", "C-D", "B-C"]);

        // From B both zero-weight options tie; A-B was queued first
        let mut graph = Graph::new();
        graph.add_edge("B", "A", 0.0);
        graph.add_edge("B", "C", -0.0);
        let prim = strict.prim(&graph, Some("B")).unwrap();
        let order: Vec<String> = prim.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(order, vec!["B-A", "B-C"]);
    }

    #[test]
    fn test_edge_sorted_counts_connectivity_checks() {
        let result = run_edge_sorted(&scenario_graph()).unwrap();
        let stats = result.statistics();
        assert_eq!(stats.connectivity_checks, stats.edges_examined);
        assert_eq!(stats.union_operations, 5);
    }

    #[test]
    fn test_solve_applies_default_start_only_to_frontier_growth() {
        let solver = MstSolver::new(EngineConfig::default().with_default_start_vertex("Q"));
        let graph = scenario_graph();

        assert!(solver.solve(&graph, AlgorithmKind::EdgeSorted, None).is_ok());
        assert!(matches!(
            solver.solve(&graph, AlgorithmKind::FrontierGrowth, None),
            Err(AlgorithmError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_compare() {
        let graph = scenario_graph();
        let comparison = MstSolver::default().compare(&graph, Some("A")).unwrap();

        assert!(comparison.same_result);
        assert_eq!(comparison.edge_sorted.steps_count, 8);
        assert_eq!(comparison.frontier_growth.steps_count, 6);
        assert_eq!(comparison.edge_sorted.edges.len(), 5);

        let value = serde_json::to_value(&comparison).unwrap();
        assert!(value["kruskal"]["total_cost"].is_number());
        assert_eq!(value["same_result"], true);
    }

    #[test]
    fn test_verify_forest_detects_tampering() {
        let graph = scenario_graph();
        let result = run_edge_sorted(&graph).unwrap();
        assert!(verify_forest(&graph, &result).is_ok());

        let other = Graph::from_costs(vec![(("A", "B"), 1.0), (("B", "C"), 1.0)]);
        assert!(verify_forest(&other, &result).is_err());
    }

    #[test]
    fn test_result_serialization_contract() {
        let result = run_edge_sorted(&scenario_graph()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

        assert_eq!(value["algorithm"], "kruskal");
        assert_eq!(value["edges"][0]["u"], "B");
        assert_eq!(value["edges"][0]["v"], "E");
        assert_eq!(value["edges"][0]["weight"], 1.5);
        assert_eq!(value["steps"][0]["step_type"], "init");
        assert_eq!(value["steps"][1]["step_type"], "accept");
        assert_eq!(value["is_complete"], true);
        assert_eq!(value["vertex_count"], 6);

        // Compare re-serialised text so float parsing precision cannot matter
        let parsed: MstResult = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.to_json().unwrap(), result.to_json().unwrap());
    }
}
