//! # SPANTRACE Core
//!
//! Minimum spanning tree engine that records a complete, replayable trace of
//! every decision it makes. The trace is the deliverable: a presentation
//! layer replays it step by step, showing which edge was examined, whether it
//! was accepted, how the components or frontier evolved, and the running
//! cost.
//!
//! ## Architecture
//!
//! - [`data_structures`]: the labelled [`Graph`], the [`DisjointSet`], the
//!   lazy frontier queue and the [`CostTable`] graph provider
//! - [`algorithm`]: the edge-sorted (Kruskal) and frontier-growth (Prim)
//!   algorithms and the [`MstSolver`] that dispatches between them
//! - [`execution`]: the append-only [`StepLog`] and the keyed [`RunStore`]
//! - [`config`]: serde-backed [`EngineConfig`]
//!
//! ## Example
//!
//! ```
//! use spantrace_core::{Graph, MstSolver, StepKind};
//!
//! let graph = Graph::from_costs(vec![
//!     (("A", "B"), 1.0),
//!     (("B", "C"), 2.0),
//!     (("A", "C"), 3.0),
//! ]);
//!
//! let result = MstSolver::default().kruskal(&graph).unwrap();
//! assert_eq!(result.total_cost(), 3.0);
//! assert!(result.is_complete());
//! assert_eq!(result.steps().count(StepKind::Reject), 0);
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;

use log::{debug, info};

pub use crate::algorithm::graph::mst::{
    run_edge_sorted, run_frontier_growth, verify_forest, Comparison, EdgeSorted, FrontierGrowth,
    MstResult, MstSolver, MstStatistics, RunSummary,
};
pub use crate::algorithm::traits::{AlgorithmError, AlgorithmKind, SpanningTreeAlgorithm};
pub use crate::config::{ConfigError, EngineConfig};
pub use crate::data_structures::cost_table::{CostTable, GraphProvider, Location, LocationKind, ProviderError};
pub use crate::data_structures::graph::{Edge, Graph, Vertex};
pub use crate::data_structures::union_find::{DisjointSet, UnionFindError};
pub use crate::execution::history::{HistoryError, Step, StepKind, StepLog};
pub use crate::execution::store::{RunId, RunStore, RunStoreError, StepView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validates the configuration and installs the `env_logger` backend
///
/// Uses defaults when `config` is `None`. Installing the logger is
/// idempotent: a logger registered earlier by the host stays in place.
pub fn init_with_config(config: Option<EngineConfig>) -> Result<EngineConfig, ConfigError> {
    let config = config.unwrap_or_default();
    config.validate()?;

    if let Err(err) = env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .try_init()
    {
        debug!("logger already installed: {}", err);
    }

    info!(
        "spantrace-core {} initialised (default algorithm: {})",
        VERSION, config.default_algorithm
    );
    Ok(config)
}
