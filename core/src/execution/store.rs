//! Keyed store of completed runs
//!
//! Presentation layers replay a run step by step long after the engine has
//! returned. Instead of a single "current result" slot, completed results are
//! retained here under a [`RunId`], so concurrent sessions never overwrite
//! each other. The store is bounded; inserting beyond capacity evicts the
//! oldest run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::graph::mst::MstResult;
use crate::config::EngineConfig;
use crate::execution::history::{HistoryError, Step};

/// Identifier of a stored run; monotonically increasing per store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunStoreError {
    #[error("Unknown run: {0}")]
    UnknownRun(RunId),

    #[error("Invalid step for run: {0}")]
    Step(#[from] HistoryError),
}

/// A single step of a stored run together with its position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepView {
    pub step: Step,
    pub step_number: usize,
    pub total_steps: usize,
}

#[derive(Debug, Default)]
struct Runs {
    retained: BTreeMap<RunId, Arc<MstResult>>,
    next_id: u64,
}

/// Bounded, thread-safe map from run id to result
#[derive(Debug)]
pub struct RunStore {
    runs: RwLock<Runs>,
    capacity: usize,
}

impl RunStore {
    /// Creates a store retaining at most `capacity` runs (at least one)
    pub fn new(capacity: usize) -> Self {
        Self {
            runs: RwLock::new(Runs::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_retained_runs)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stores a result and returns its id
    pub fn insert(&self, result: MstResult) -> RunId {
        let mut runs = self.runs.write().unwrap_or_else(PoisonError::into_inner);
        let id = RunId(runs.next_id);
        runs.next_id += 1;
        runs.retained.insert(id, Arc::new(result));

        // Ids are allocated under the lock, so the first key is the oldest run
        while runs.retained.len() > self.capacity {
            if let Some((evicted, _)) = runs.retained.pop_first() {
                debug!("run store full, evicted {}", evicted);
            }
        }

        id
    }

    pub fn get(&self, id: RunId) -> Result<Arc<MstResult>, RunStoreError> {
        let runs = self.runs.read().unwrap_or_else(PoisonError::into_inner);
        runs.retained.get(&id).cloned().ok_or(RunStoreError::UnknownRun(id))
    }

    /// Step `index` of run `id`
    pub fn step(&self, id: RunId, index: usize) -> Result<StepView, RunStoreError> {
        let result = self.get(id)?;
        let step = result.steps().get(index)?.clone();
        Ok(StepView {
            step,
            step_number: index,
            total_steps: result.steps().len(),
        })
    }

    /// Most recently inserted run still retained
    pub fn latest(&self) -> Option<(RunId, Arc<MstResult>)> {
        let runs = self.runs.read().unwrap_or_else(PoisonError::into_inner);
        runs.retained
            .iter()
            .next_back()
            .map(|(id, result)| (*id, Arc::clone(result)))
    }

    pub fn remove(&self, id: RunId) -> Option<Arc<MstResult>> {
        let mut runs = self.runs.write().unwrap_or_else(PoisonError::into_inner);
        runs.retained.remove(&id)
    }

    /// Retained ids, oldest first
    pub fn ids(&self) -> Vec<RunId> {
        let runs = self.runs.read().unwrap_or_else(PoisonError::into_inner);
        runs.retained.keys().copied().collect()
    }

    pub fn clear(&self) {
        let mut runs = self.runs.write().unwrap_or_else(PoisonError::into_inner);
        runs.retained.clear();
    }

    pub fn len(&self) -> usize {
        self.runs.read().unwrap_or_else(PoisonError::into_inner).retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RunStore {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
