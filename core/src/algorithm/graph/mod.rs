//! Traced spanning tree algorithms over weighted undirected graphs
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod mst;

pub use self::mst::{
    run_edge_sorted, run_frontier_growth, verify_forest, Comparison, EdgeSorted, FrontierGrowth,
    MstResult, MstSolver, MstStatistics, RunSummary,
};
