//! Graph, disjoint-set and frontier structures used by the engine
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod union_find;
pub mod priority_queue;
pub mod cost_table;

pub use self::graph::{Edge, Graph, Neighbor, Vertex};
pub use self::union_find::{DisjointSet, UnionFindError};
pub use self::priority_queue::{FrontierEntry, FrontierQueue};
pub use self::cost_table::{CostTable, GraphProvider, Location, LocationKind, ProviderError};
