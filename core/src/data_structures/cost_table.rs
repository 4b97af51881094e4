//! Location registry and pairwise cost table
//!
//! A [`GraphProvider`] is anything that can hand the engine a fresh graph.
//! [`CostTable`] is the provider used for the bundled demonstration data: a
//! set of named locations plus a table of connection costs that callers may
//! edit between runs. Every `snapshot` builds a new graph from the current
//! table, so there is no cached graph to invalidate.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::{Graph, Vertex};

/// Source of graphs for the engine
pub trait GraphProvider {
    /// Builds a graph reflecting the provider's current state
    fn snapshot(&self) -> Graph;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Cost between a location and itself is not allowed: {0}")]
    SelfLoop(String),

    #[error("Invalid weight {weight} for {u}-{v}: must be finite and non-negative")]
    InvalidWeight { u: String, v: String, weight: f64 },
}

/// Role of a location in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Main,
    Branch,
}

/// Descriptive data for a location; the engine only sees its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: LocationKind) -> Self {
        Self { name: name.into(), address: address.into(), kind }
    }
}

type CostKey = (Vertex, Vertex);

fn canonical_key(u: &str, v: &str) -> CostKey {
    if u <= v {
        (u.to_string(), v.to_string())
    } else {
        (v.to_string(), u.to_string())
    }
}

/// Editable table of locations and pairwise costs
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    locations: BTreeMap<Vertex, Location>,
    costs: BTreeMap<CostKey, f64>,
    baseline: BTreeMap<CostKey, f64>,
}

impl CostTable {
    /// Creates a table with the given locations and no costs
    pub fn new(locations: impl IntoIterator<Item = (Vertex, Location)>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            costs: BTreeMap::new(),
            baseline: BTreeMap::new(),
        }
    }

    /// Six restaurant branches around Hanoi with fifteen delivery costs
    pub fn with_defaults() -> Self {
        let locations = [
            ("A", "Phở Cổ (Chính)", "Phố cổ Hà Nội", LocationKind::Main),
            ("B", "Times City", "Hai Bà Trưng, Hà Nội", LocationKind::Branch),
            ("C", "Lotte Center", "Ba Đình, Hà Nội", LocationKind::Branch),
            ("D", "Aeon Long Biên", "Long Biên, Hà Nội", LocationKind::Branch),
            ("E", "Royal City", "Thanh Xuân, Hà Nội", LocationKind::Branch),
            ("F", "BigC Thăng Long", "Nam Từ Liêm, Hà Nội", LocationKind::Branch),
        ];
        let costs = [
            ("A", "B", 3.2), ("A", "C", 2.8), ("A", "D", 4.5), ("A", "E", 3.6), ("A", "F", 4.1),
            ("B", "C", 2.1), ("B", "D", 1.9), ("B", "E", 1.5), ("B", "F", 3.8),
            ("C", "D", 3.4), ("C", "E", 2.6), ("C", "F", 1.8),
            ("D", "E", 2.9), ("D", "F", 2.3),
            ("E", "F", 2.7),
        ];

        let mut table = Self::new(locations.iter().map(|(label, name, address, kind)| {
            (label.to_string(), Location::new(*name, *address, *kind))
        }));
        for (u, v, cost) in costs {
            table.costs.insert(canonical_key(u, v), cost);
        }
        table.baseline = table.costs.clone();
        table
    }

    pub fn locations(&self) -> &BTreeMap<Vertex, Location> {
        &self.locations
    }

    /// Registers or replaces a location
    pub fn add_location(&mut self, label: impl Into<Vertex>, location: Location) {
        self.locations.insert(label.into(), location);
    }

    /// Cost between `u` and `v` in either orientation
    pub fn cost(&self, u: &str, v: &str) -> Option<f64> {
        self.costs.get(&canonical_key(u, v)).copied()
    }

    /// All costs keyed by `(min, max)` label pair
    pub fn costs(&self) -> &BTreeMap<CostKey, f64> {
        &self.costs
    }

    fn validate(&self, u: &str, v: &str, cost: f64) -> Result<CostKey, ProviderError> {
        for label in [u, v] {
            if !self.locations.contains_key(label) {
                return Err(ProviderError::UnknownLocation(label.to_string()));
            }
        }
        if u == v {
            return Err(ProviderError::SelfLoop(u.to_string()));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(ProviderError::InvalidWeight {
                u: u.to_string(),
                v: v.to_string(),
                weight: cost,
            });
        }
        Ok(canonical_key(u, v))
    }

    /// Sets the cost of a pair, updating it if present in either orientation
    pub fn set_cost(&mut self, u: &str, v: &str, cost: f64) -> Result<(), ProviderError> {
        let key = self.validate(u, v, cost)?;
        debug!("cost {}-{} set to {}", key.0, key.1, cost);
        self.costs.insert(key, cost);
        Ok(())
    }

    /// Applies a batch of updates atomically: nothing changes if any entry
    /// is invalid. Returns the number of entries applied.
    pub fn update_costs<I, K>(&mut self, updates: I) -> Result<usize, ProviderError>
    where
        I: IntoIterator<Item = ((K, K), f64)>,
        K: AsRef<str>,
    {
        let mut staged = Vec::new();
        for ((u, v), cost) in updates {
            staged.push((self.validate(u.as_ref(), v.as_ref(), cost)?, cost));
        }

        let applied = staged.len();
        for (key, cost) in staged {
            self.costs.insert(key, cost);
        }
        info!("applied {} cost updates", applied);
        Ok(applied)
    }

    /// Restores the costs the table was created with
    pub fn reset(&mut self) {
        self.costs = self.baseline.clone();
        info!("cost table reset to {} baseline entries", self.costs.len());
    }

    /// Dense matrix view: 0 on the diagonal, `+inf` where no cost is known
    pub fn cost_matrix(&self) -> BTreeMap<Vertex, BTreeMap<Vertex, f64>> {
        self.locations
            .keys()
            .map(|u| {
                let row = self
                    .locations
                    .keys()
                    .map(|v| {
                        let cost = if u == v {
                            0.0
                        } else {
                            self.cost(u, v).unwrap_or(f64::INFINITY)
                        };
                        (v.clone(), cost)
                    })
                    .collect();
                (u.clone(), row)
            })
            .collect()
    }
}

impl GraphProvider for CostTable {
    /// Every location becomes a vertex, including ones without any cost
    fn snapshot(&self) -> Graph {
        let mut graph = Graph::from_costs(
            self.costs
                .iter()
                .map(|((u, v), cost)| ((u.clone(), v.clone()), *cost)),
        );
        for label in self.locations.keys() {
            graph.add_vertex(label.clone());
        }
        graph
    }
}
