//! SPANTRACE Algorithm Framework
//! Spanning tree algorithms that record every decision they make
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod graph;

pub use self::traits::*;
pub use self::graph::*;
