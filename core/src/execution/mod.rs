//! Step logs and retained run results
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod history;
pub mod store;

pub use self::history::{HistoryError, Step, StepKind, StepLog};
pub use self::store::{RunId, RunStore, RunStoreError, StepView};
